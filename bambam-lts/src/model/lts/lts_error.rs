use super::RoadClass;
use crate::{config::LtsMethod, model::way::OsmWayId};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LtsError {
    #[error("invalid LTS configuration: {0}")]
    ConfigurationError(String),
    #[error("way {way_id} has invalid '{tag}' tag: {message}")]
    InvalidTag {
        way_id: OsmWayId,
        tag: String,
        message: String,
    },
    #[error("way {0} has road class '{1}' which is not supported by the {2} LTS method")]
    UnsupportedRoadClass(OsmWayId, RoadClass, LtsMethod),
    #[error("way {0} is missing '{1}' and road class '{2}' has no fallback value")]
    ImputationGap(OsmWayId, String, RoadClass),
    #[error("failure reading file {0}: {1}")]
    CsvReadError(String, csv::Error),
    #[error("failure writing to file {0}: {1}")]
    CsvWriteError(String, csv::Error),
    #[error("failure with file {0}: {1}")]
    IoError(String, std::io::Error),
    #[error("{0}")]
    InternalError(String),
}

impl LtsError {
    /// errors scoped to a single way or edge. these exclude the way from the
    /// output rather than failing the run.
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            LtsError::InvalidTag { .. }
                | LtsError::UnsupportedRoadClass(..)
                | LtsError::ImputationGap(..)
        )
    }
}

use super::lts::LtsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LtsCliError {
    #[error("failure reading run configuration: {0}")]
    ConfigurationError(String),
    #[error("failure running LTS classification: {source}")]
    LtsError {
        #[from]
        source: LtsError,
    },
    #[error("failure reading configuration: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
    #[error("failure decoding JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
}

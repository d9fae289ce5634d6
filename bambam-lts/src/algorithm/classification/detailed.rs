use super::{ClassificationContext, LtsClassifier};
use crate::{
    algorithm::imputation::ImputationTable,
    config::LtsMethod,
    model::{
        lts::{LtsError, LtsLevel, RoadClass, Side},
        way::LtsWay,
    },
};

/// scores each side of a way from its bike facility, parking, lane count,
/// speed and widths, imputing missing attributes from the other ways of the
/// same road class.
pub struct DetailedClassifier {
    table: ImputationTable,
}

impl DetailedClassifier {
    pub fn new(table: ImputationTable) -> DetailedClassifier {
        DetailedClassifier { table }
    }

    pub fn table(&self) -> &ImputationTable {
        &self.table
    }
}

impl LtsClassifier for DetailedClassifier {
    fn method(&self) -> LtsMethod {
        LtsMethod::Detailed
    }

    fn classify(&self, way: &LtsWay, side: Side) -> Result<Option<LtsLevel>, LtsError> {
        use RoadClass as RC;
        match &way.road_class {
            RC::Motorway | RC::MotorwayLink | RC::Trunk | RC::TrunkLink => Ok(Some(LtsLevel::Lts5)),
            RC::Path | RC::LivingStreet => Ok(Some(LtsLevel::Lts1)),
            RC::Primary
            | RC::PrimaryLink
            | RC::Secondary
            | RC::SecondaryLink
            | RC::Tertiary
            | RC::TertiaryLink
            | RC::Unclassified
            | RC::Residential => {
                let context = ClassificationContext::resolve(way, side, &self.table)?;
                Ok(context.level())
            }
            RC::Cycleway | RC::Track | RC::Pedestrian | RC::Service | RC::Unsupported(_) => {
                Err(LtsError::UnsupportedRoadClass(
                    way.id,
                    way.road_class.clone(),
                    LtsMethod::Detailed,
                ))
            }
        }
    }
}

mod classification_context;
mod conveyal;
mod detailed;

pub use classification_context::ClassificationContext;
pub use conveyal::ConveyalClassifier;
pub use detailed::DetailedClassifier;

use crate::{
    algorithm::imputation::ImputationTable,
    config::LtsMethod,
    model::{
        lts::{LtsError, LtsLevel, Side},
        way::LtsWay,
    },
};

/// rates one direction of travel along a way.
///
/// implementations hold only read-only state built before classification
/// begins, so a single classifier is shared across worker threads.
pub trait LtsClassifier: Send + Sync {
    fn method(&self) -> LtsMethod;

    /// the stress level for travel along the given side of this way.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(level))` when the way is rated
    /// * `Ok(None)` when the method deliberately leaves this kind of way unrated
    /// * `Err` with a data error when the way cannot be rated, which excludes
    ///   the way without failing the run
    fn classify(&self, way: &LtsWay, side: Side) -> Result<Option<LtsLevel>, LtsError>;
}

/// builds the classifier for a method. any per-run tables are computed here
/// over the full set of ways, before any way is classified.
pub fn build_classifier(
    method: LtsMethod,
    ways: &[LtsWay],
    missing_tolerance: f64,
) -> Result<Box<dyn LtsClassifier>, LtsError> {
    match method {
        LtsMethod::Conveyal => Ok(Box::new(ConveyalClassifier::new(ways))),
        LtsMethod::Detailed => {
            let table = ImputationTable::new(ways, missing_tolerance)?;
            Ok(Box::new(DetailedClassifier::new(table)))
        }
    }
}

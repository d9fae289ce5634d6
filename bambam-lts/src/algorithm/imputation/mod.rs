mod hand_authored_defaults;
mod imputable_attribute;
mod imputation_table;

pub use hand_authored_defaults::HandAuthoredDefaults;
pub use imputable_attribute::{CategoricalAttribute, NumericAttribute};
pub use imputation_table::{ClassStatistic, ImputationTable};

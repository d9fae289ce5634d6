mod directional_resolver;
mod paired_attribute;

pub use directional_resolver::{copy_categorical, split_numeric};
pub use paired_attribute::{PairedAttribute, ResolvedPair};

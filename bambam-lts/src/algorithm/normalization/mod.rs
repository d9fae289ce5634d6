mod facility_set;
pub mod tag_normalizer;

pub use facility_set::FacilitySet;

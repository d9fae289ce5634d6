mod lts_error;
mod lts_level;
mod road_class;
mod side;

pub use lts_error::LtsError;
pub use lts_level::LtsLevel;
pub use road_class::RoadClass;
pub use side::Side;

mod lts_way;
mod osm_way_id;
mod raw_way_row;
mod tag_value;

pub use lts_way::LtsWay;
pub use osm_way_id::OsmWayId;
pub use raw_way_row::RawWayRow;
pub use tag_value::TagValue;

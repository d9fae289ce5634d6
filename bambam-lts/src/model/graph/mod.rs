mod edge_row;
pub mod geometry_ops;
mod lts_edge;

pub use edge_row::EdgeRow;
pub use lts_edge::LtsEdge;

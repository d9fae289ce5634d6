pub mod graph;
pub mod lts;
mod lts_cli_error;
pub mod way;

pub use lts_cli_error::LtsCliError;

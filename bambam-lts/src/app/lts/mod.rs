mod lts_output;
pub mod lts_ops;
pub mod lts_writer;
pub mod read_ops;

pub use lts_output::LtsOutput;
pub use lts_writer::LtsWriter;

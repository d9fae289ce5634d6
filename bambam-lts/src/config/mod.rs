mod lts;
mod lts_method;
mod output_method;

pub use lts::LtsConfiguration;
pub use lts_method::LtsMethod;
pub use output_method::OutputMethod;

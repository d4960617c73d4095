pub mod assembler;
pub mod config;
pub mod error;
pub mod logging;
pub mod template;

pub use assembler::{AssembleReport, PageAssembler, PagePaths, PageSources, assemble};
pub use config::Config;
pub use error::AssembleError;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssembleError {
    #[error("at least {required} input files are required, got {given}")]
    Usage { required: usize, given: usize },
    #[error("error reading template {}", .path.display())]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("error reading script file {}", .path.display())]
    ScriptRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("unable to read input file {}", .path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("error writing output {}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl AssembleError {
    /// Process exit status for this failure. Usage errors follow the clap convention.
    pub fn exit_code(&self) -> u8 {
        match self {
            AssembleError::Usage { .. } => 2,
            _ => 1,
        }
    }
}

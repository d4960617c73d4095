use std::path::PathBuf;

use clap::Parser;

use crate::assembler::PagePaths;
use crate::error::AssembleError;

const REQUIRED_INPUTS: usize = 2;
const TEMPLATE_FILE: &str = "../dist/template.html";
const SCRIPT_FILE: &str = "../dist/main.js";
const OUTPUT_FILE: &str = "output.html";

#[derive(Debug, Parser)]
#[command(
    name = "page-builder",
    about = "Bundle dependency and clustering data with the viewer script into a single HTML page.",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Dependencies file followed by clustering file.
    #[arg(value_name = "FILE", trailing_var_arg = true, allow_hyphen_values = true)]
    pub inputs: Vec<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub paths: PagePaths,
}

impl Config {
    pub fn from_cli() -> Result<Self, AssembleError> {
        Config::from_parts(Cli::parse())
    }

    /// Template, script and output locations are fixed relative to the working directory.
    pub fn from_parts(cli: Cli) -> Result<Self, AssembleError> {
        let given = cli.inputs.len();
        let mut inputs = cli.inputs.into_iter();
        let (Some(dependencies), Some(clustering)) = (inputs.next(), inputs.next()) else {
            return Err(AssembleError::Usage {
                required: REQUIRED_INPUTS,
                given,
            });
        };

        Ok(Self {
            paths: PagePaths {
                template: PathBuf::from(TEMPLATE_FILE),
                script: PathBuf::from(SCRIPT_FILE),
                dependencies,
                clustering,
                output: PathBuf::from(OUTPUT_FILE),
            },
        })
    }
}

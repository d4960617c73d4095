use std::process::ExitCode;

use anyhow::Result;
use clap::CommandFactory;
use page_builder::config::Cli;
use page_builder::logging::init_tracing;
use page_builder::{AssembleError, Config, PageAssembler};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let assemble_err = err.downcast_ref::<AssembleError>();
            if let Some(AssembleError::Usage { .. }) = assemble_err {
                eprintln!("{}", Cli::command().render_usage());
            }
            ExitCode::from(assemble_err.map_or(1, AssembleError::exit_code))
        }
    }
}

fn run() -> Result<()> {
    let config = Config::from_cli()?;
    init_tracing();

    let report = PageAssembler::new(config.paths).assemble()?;
    println!("Success! Wrote {}", report.output_path.display());
    Ok(())
}

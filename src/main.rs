//! ntree - tree-compatible directory structure viewer
//!
//! Usage: ntree [OPTIONS] [DIRECTORY]
//!
//! Modes:
//!   (default)  box-drawing tree with a summary report
//!   --short    compact listing grouped by directory
//!   --csv      one row per entry
//!   --md       wrap compat or short output in Markdown

use std::process::ExitCode;

use clap::Parser;

use neotree::cli::Cli;
use neotree::config::Config;
use neotree::runner::{run_with_cli, write_output};
use neotree::NtreeResult;

mod logging;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = logging::init(cli.verbose) {
        eprintln!("ntree: {err:#}");
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "ntree failed");
            eprintln!("ntree: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> NtreeResult<()> {
    let config = Config::load_or_default()?;
    let output = run_with_cli(cli, &config)?;
    write_output(&output, cli.output_file.as_deref())
}

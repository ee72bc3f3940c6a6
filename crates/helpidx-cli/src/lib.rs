//! helpidx CLI - build the concept help index page
//!
//! Locates the concept listings, runs the two-phase build from `helpidx-core`
//! and writes the rendered page. Exit codes are described in [`error`].
use anyhow::Result;
use clap::Parser;
use helpidx_core::Config;
use tracing::debug;

mod cli;
mod commands;
pub mod error;
mod output;
mod utils;

use crate::cli::Cli;
use crate::commands::{BuildRequest, Sink};
use crate::error::CliError;
use crate::utils::initialize_logging;

/// Execute the helpidx CLI with the current process arguments.
///
/// # Errors
///
/// Returns an error if configuration is invalid, an input cannot be read,
/// the output cannot be written, or `--check` finds malformed records.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    initialize_logging(&cli)?;

    let request = resolve_request(cli)?;
    debug!(sink = ?request.sink, inputs = request.inputs.len(), "resolved build request");
    commands::execute(&request)
}

fn resolve_request(cli: Cli) -> Result<BuildRequest> {
    let mut config = Config::resolve(cli.config.as_deref()).map_err(CliError::usage)?;
    if let Some(root) = cli.root {
        config.root = root;
    }
    if let Some(output) = cli.output {
        config.output = output;
    }

    let sink = if cli.check {
        Sink::None
    } else if cli.stdout {
        Sink::Stdout
    } else {
        Sink::File(config.output_path())
    };

    Ok(BuildRequest {
        config,
        inputs: cli.inputs,
        sink,
        stats: cli.stats,
        format: cli.format,
    })
}

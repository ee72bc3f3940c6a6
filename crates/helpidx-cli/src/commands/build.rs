//! The build command: read listings, aggregate, render.

use anyhow::{Result, anyhow};
use helpidx_core::{BuildOutput, Config, HtmlRenderer, build_index};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::CliError;
use crate::output::{OutputFormat, print_check, print_stats};
use crate::utils::fs::write_atomically;

/// Where the rendered page goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sink {
    /// Write to a file, replacing it atomically.
    File(PathBuf),
    /// Write to standard output.
    Stdout,
    /// Build only; nothing is rendered.
    None,
}

/// A fully resolved build invocation.
#[derive(Debug, Clone)]
pub struct BuildRequest {
    /// Resolved configuration, CLI overrides applied.
    pub config: Config,
    /// Explicit inputs, read relative to the working directory.
    pub inputs: Vec<PathBuf>,
    /// Destination of the rendered page.
    pub sink: Sink,
    /// Report build counters when done.
    pub stats: bool,
    /// Format of `--check` and `--stats` reports.
    pub format: OutputFormat,
}

/// Run a build to completion.
///
/// Every input is read before the sink is touched; a missing input leaves
/// any existing output untouched.
pub fn execute(request: &BuildRequest) -> Result<()> {
    let output = if request.inputs.is_empty() {
        build_index(&request.config.root, &request.config.inputs)
    } else {
        build_index(Path::new(""), &request.inputs)
    }
    .map_err(CliError::from_core)?;

    let renderer = HtmlRenderer::new(request.config.render.clone());

    match &request.sink {
        Sink::File(path) => {
            write_atomically(path, |w| Ok(renderer.render(&output.index, w)?))
                .map_err(CliError::internal)?;
            info!(path = %path.display(), entries = output.index.len(), "wrote help index");
            report_stats(request, &output, &mut io::stdout().lock())?;
        },
        Sink::Stdout => {
            renderer
                .render(&output.index, io::stdout().lock())
                .map_err(CliError::from_core)?;
            report_stats(request, &output, &mut io::stderr().lock())?;
        },
        Sink::None => {
            let mut stdout = io::stdout().lock();
            print_check(&mut stdout, request.format, &output.diagnostics, &output.stats)?;
            stdout.flush()?;
            if !output.diagnostics.is_empty() {
                return Err(CliError::integrity(anyhow!(
                    "{} malformed record(s) in concept listings",
                    output.diagnostics.len()
                ))
                .into());
            }
        },
    }

    Ok(())
}

fn report_stats<W: Write>(request: &BuildRequest, output: &BuildOutput, out: &mut W) -> Result<()> {
    if request.stats {
        print_stats(out, request.format, &output.stats)?;
    }
    Ok(())
}

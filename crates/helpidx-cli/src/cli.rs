//! # CLI Structure and Argument Parsing
//!
//! `helpidx` reads concept listings, builds one index and writes it as an
//! HTML page. Inputs and output default to the configured documentation tree.
//!
//! ```bash
//! # Build docs/manualpages/help.html under the current directory
//! helpidx
//!
//! # Explicit tree and output
//! helpidx --root ~/petsc -o /tmp/help.html
//!
//! # Ad-hoc listings to stdout
//! helpidx --stdout docs/tex/manconcepts extra-concepts.txt
//!
//! # Only report malformed records
//! helpidx --check --format json
//! ```

use clap::Parser;
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Build a cross-referenced concept help index.
#[derive(Parser, Clone, Debug)]
#[command(name = "helpidx")]
#[command(version)]
#[command(about = "Build a cross-referenced concept help index page", long_about = None)]
pub struct Cli {
    /// Concept listings to read (default: the configured inputs under --root)
    #[arg(value_name = "INPUT")]
    pub inputs: Vec<PathBuf>,

    /// Configuration file (TOML)
    #[arg(short, long, env = "HELPIDX_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Documentation root that configured inputs and output are resolved against
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Output file (relative paths resolve against --root)
    #[arg(short, long, value_name = "FILE", conflicts_with = "stdout")]
    pub output: Option<PathBuf>,

    /// Write the index page to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,

    /// Build the index and report problems without writing anything
    #[arg(long, conflicts_with_all = ["stdout", "output"])]
    pub check: bool,

    /// Print index statistics after building
    #[arg(long)]
    pub stats: bool,

    /// Format for --check and --stats reports
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Only print errors
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

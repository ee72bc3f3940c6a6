//! Two-phase index construction: read every source, then hand over a frozen index.
//!
//! Sources are read completely before any of their lines are parsed, so an
//! unreadable source never contributes half of its records. [`build_index`]
//! fails as a whole when any source cannot be read.
//!
//! ```rust
//! use helpidx_core::IndexBuilder;
//!
//! let mut builder = IndexBuilder::new();
//! builder.ingest_str("exampleconcepts", "ex1 Alpha;Beta^Gamma\nex2 Alpha^A^B\n");
//! let output = builder.finish();
//!
//! assert_eq!(output.index.primary_count(), 2);
//! assert_eq!(output.diagnostics.len(), 1);
//! assert_eq!(output.stats.lines, 2);
//! ```

use crate::parser::parse_line;
use crate::{ConceptIndex, Diagnostic, Error, IndexStats, InsertOutcome, Result, SourceLocation};
use std::borrow::Cow;
use std::fs;
use std::io::BufRead;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Result of a completed build.
#[derive(Debug, Clone, Default)]
pub struct BuildOutput {
    /// The finished index, ready to render.
    pub index: ConceptIndex,
    /// Non-fatal problems found in the input, in input order.
    pub diagnostics: Vec<Diagnostic>,
    /// Counters for the whole build.
    pub stats: IndexStats,
}

/// Accumulates records from any number of sources into one [`ConceptIndex`].
#[derive(Debug, Default)]
pub struct IndexBuilder {
    index: ConceptIndex,
    diagnostics: Vec<Diagnostic>,
    stats: IndexStats,
}

impl IndexBuilder {
    /// Create a builder with an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse one line and fold its associations into the index.
    pub fn ingest_line(&mut self, line: &str, location: &SourceLocation) {
        self.stats.lines += 1;
        let parsed = parse_line(line, location);

        for diagnostic in parsed.diagnostics {
            warn!("{diagnostic}");
            debug!(line = %diagnostic.line, "offending record");
            self.diagnostics.push(diagnostic);
        }

        for association in parsed.associations {
            self.stats.associations += 1;
            if let InsertOutcome::Replaced { previous_path } = self.index.insert(association) {
                self.stats.replaced += 1;
                debug!(%location, %previous_path, "replaced existing index entry");
            }
        }
    }

    /// Ingest every line of an in-memory source.
    pub fn ingest_str(&mut self, source: &str, text: &str) {
        self.stats.sources += 1;
        for (idx, line) in text.lines().enumerate() {
            self.ingest_line(line, &SourceLocation::new(source, idx + 1));
        }
        debug!(source, entries = self.index.len(), "ingested source");
    }

    /// Read `reader` to the end, then ingest its lines.
    ///
    /// Nothing from the source is indexed if reading fails part-way.
    pub fn ingest_reader<R: BufRead>(&mut self, source: &str, mut reader: R) -> Result<()> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let text = decode(source, &bytes);
        self.ingest_str(source, &text);
        Ok(())
    }

    /// Read and ingest the file at `path`.
    pub fn ingest_path(&mut self, path: &Path) -> Result<()> {
        let bytes = fs::read(path).map_err(|source| Error::Source {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path.display().to_string();
        let text = decode(&name, &bytes);
        self.ingest_str(&name, &text);
        Ok(())
    }

    /// The index built so far.
    pub const fn index(&self) -> &ConceptIndex {
        &self.index
    }

    /// Diagnostics collected so far.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Freeze the index and return it with everything collected on the way.
    pub fn finish(self) -> BuildOutput {
        let mut stats = self.stats;
        stats.primary_keys = self.index.primary_count();
        stats.entries = self.index.len();
        stats.diagnostics = self.diagnostics.len();

        BuildOutput {
            index: self.index,
            diagnostics: self.diagnostics,
            stats,
        }
    }
}

fn decode<'a>(source: &str, bytes: &'a [u8]) -> Cow<'a, str> {
    let text = String::from_utf8_lossy(bytes);
    if matches!(text, Cow::Owned(_)) {
        warn!(source, "input is not valid UTF-8; invalid bytes were replaced");
    }
    text
}

/// Build one index from `inputs`, resolved against `root`.
///
/// Relative inputs are joined onto `root`; absolute ones are used as-is.
/// Any unreadable input aborts the build.
pub fn build_index(root: &Path, inputs: &[PathBuf]) -> Result<BuildOutput> {
    let mut builder = IndexBuilder::new();
    for input in inputs {
        let path = root.join(input);
        debug!(path = %path.display(), "reading concept listing");
        builder.ingest_path(&path)?;
    }

    let output = builder.finish();
    info!(
        sources = output.stats.sources,
        primary_keys = output.stats.primary_keys,
        entries = output.stats.entries,
        diagnostics = output.stats.diagnostics,
        "built help index"
    );
    Ok(output)
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// Secondary grouping key of a concept tag.
///
/// Tags without a `^` separator land in the [`SecondaryKey::Unkeyed`] bucket,
/// which is rendered as plain link rows directly under the primary heading.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecondaryKey {
    /// No secondary key was given.
    Unkeyed,
    /// Named sub-group under a primary key.
    Named(String),
}

impl SecondaryKey {
    /// Build a secondary key from raw tag text; `None` means the tag had no `^` part.
    pub fn from_segment(segment: Option<&str>) -> Self {
        segment.map_or(Self::Unkeyed, |s| Self::Named(s.trim().to_string()))
    }

    /// Name of the bucket, or `None` for the sentinel bucket.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Unkeyed => None,
            Self::Named(name) => Some(name),
        }
    }

    /// Whether this is the sentinel bucket.
    pub const fn is_unkeyed(&self) -> bool {
        matches!(self, Self::Unkeyed)
    }
}

impl fmt::Display for SecondaryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unkeyed => f.write_str("<none>"),
            Self::Named(name) => f.write_str(name),
        }
    }
}

/// One concept tag resolved against the document it was attached to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptAssociation {
    /// Top-level concept name, trimmed and non-empty.
    pub primary_key: String,
    /// Optional sub-grouping under the primary key.
    pub secondary_key: SecondaryKey,
    /// Text shown for the generated link.
    pub link_label: String,
    /// Path the link points at, relative to the document root.
    pub target_path: String,
}

/// Where a record came from, for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    /// Name of the input source (usually its path).
    pub source: String,
    /// 1-based line number inside the source.
    pub line: usize,
}

impl SourceLocation {
    /// Create a location for `line` in `source`.
    pub fn new(source: impl Into<String>, line: usize) -> Self {
        Self {
            source: source.into(),
            line,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.source, self.line)
    }
}

/// Non-fatal problem found while reading records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    /// How serious the problem is.
    pub severity: DiagnosticSeverity,
    /// Human-readable description.
    pub message: String,
    /// Where the offending record was read from.
    pub location: SourceLocation,
    /// The offending input line, verbatim.
    pub line: String,
}

/// Severity level of a [`Diagnostic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    /// Record could not be used at all.
    Error,
    /// Record was used in part; some tags were dropped.
    Warn,
    /// Informational note.
    Info,
}

impl fmt::Display for DiagnosticSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Error => "error",
            Self::Warn => "warning",
            Self::Info => "info",
        })
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.location, self.severity, self.message)
    }
}

/// Counters collected while building an index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    /// Input sources consumed.
    pub sources: usize,
    /// Lines read across all sources, blank ones included.
    pub lines: usize,
    /// Associations produced by the parser.
    pub associations: usize,
    /// Distinct primary keys (case-insensitive).
    pub primary_keys: usize,
    /// Stored `(primary, secondary, label)` entries.
    pub entries: usize,
    /// Associations that overwrote an existing entry's path.
    pub replaced: usize,
    /// Diagnostics emitted by the parser.
    pub diagnostics: usize,
}

//! CLI error handling with semantic exit codes.
//!
//! | Code | Category | Description |
//! |------|----------|-------------|
//! | 0 | Success | Index written (or check passed) |
//! | 1 | `Internal` | Unexpected failure, e.g. the output could not be written |
//! | 2 | `Usage` | Invalid arguments or configuration |
//! | 3 | `NotFound` | An input listing does not exist |
//! | 7 | `Integrity` | `--check` found malformed records |
//!
//! ```bash
//! helpidx --check
//! case $? in
//!     0) echo "clean" ;;
//!     7) echo "malformed concept tags" ;;
//!     *) echo "build failed" ;;
//! esac
//! ```

use std::fmt;

/// Semantic error category determining the exit code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ErrorCategory {
    /// Unexpected or internal error (exit code 1).
    Internal = 1,
    /// Invalid arguments or configuration (exit code 2).
    Usage = 2,
    /// An input source does not exist (exit code 3).
    NotFound = 3,
    /// Input contains malformed records (exit code 7).
    Integrity = 7,
}

impl ErrorCategory {
    /// Get the exit code for this category.
    #[must_use]
    pub const fn exit_code(self) -> u8 {
        self as u8
    }

    /// Get a short description of this error category.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Internal => "internal error",
            Self::Usage => "usage error",
            Self::NotFound => "not found",
            Self::Integrity => "integrity error",
        }
    }

    /// Map a core error onto a category.
    #[must_use]
    pub fn from_core(err: &helpidx_core::Error) -> Self {
        match err {
            e if e.is_not_found() => Self::NotFound,
            helpidx_core::Error::Config(_) => Self::Usage,
            _ => Self::Internal,
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// A CLI error with a semantic category for exit code mapping.
#[derive(Debug)]
pub struct CliError {
    /// The semantic category of this error.
    pub category: ErrorCategory,
    /// The underlying error with full context.
    pub source: anyhow::Error,
}

impl CliError {
    /// Create a new CLI error with explicit category.
    pub fn new(category: ErrorCategory, source: impl Into<anyhow::Error>) -> Self {
        Self {
            category,
            source: source.into(),
        }
    }

    /// Wrap a core error, picking the category from its kind.
    pub fn from_core(err: helpidx_core::Error) -> Self {
        Self::new(ErrorCategory::from_core(&err), err)
    }

    /// Create an internal error (exit code 1).
    pub fn internal(source: impl Into<anyhow::Error>) -> Self {
        Self::new(ErrorCategory::Internal, source)
    }

    /// Create a usage error (exit code 2).
    pub fn usage(source: impl Into<anyhow::Error>) -> Self {
        Self::new(ErrorCategory::Usage, source)
    }

    /// Create an integrity error (exit code 7).
    pub fn integrity(source: impl Into<anyhow::Error>) -> Self {
        Self::new(ErrorCategory::Integrity, source)
    }

    /// Get the exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        self.category.exit_code()
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#}", self.source)
    }
}

// Display already renders the whole chain.
impl std::error::Error for CliError {}

/// Determine the exit code from an `anyhow::Error`.
///
/// `CliError`s carry their category; bare core errors are mapped by kind;
/// anything else is internal.
#[must_use]
pub fn exit_code_from_error(err: &anyhow::Error) -> u8 {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return cli_err.exit_code();
    }
    if let Some(core_err) = err.downcast_ref::<helpidx_core::Error>() {
        return ErrorCategory::from_core(core_err).exit_code();
    }
    ErrorCategory::Internal.exit_code()
}

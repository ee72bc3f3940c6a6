//! Error types and handling for helpidx-core operations.
//!
//! Only a few things can fail while building a help index:
//!
//! - **I/O Errors**: reading an input source or writing the output sink
//! - **Source Errors**: an input source could not be opened or read; the whole
//!   build is abandoned and nothing is rendered
//! - **Configuration Errors**: invalid or unreadable settings files
//!
//! Malformed records are *not* errors. They are reported as
//! [`Diagnostic`](crate::Diagnostic)s and the build continues.
//!
//! ```rust
//! use helpidx_core::{Error, Result};
//!
//! fn describe(result: Result<()>) -> String {
//!     match result {
//!         Ok(()) => "ok".to_string(),
//!         Err(e) if e.is_recoverable() => format!("retry: {e}"),
//!         Err(e) => format!("{}: {e}", e.category()),
//!     }
//! }
//!
//! assert_eq!(describe(Ok(())), "ok");
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for helpidx-core operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation failed.
    ///
    /// Covers writes to the output sink and other file system operations
    /// that are not tied to a specific input source.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An input source could not be read.
    ///
    /// The build never renders a partial index: one unreadable source fails
    /// the whole operation.
    #[error("Failed to read input '{}'", path.display())]
    Source {
        /// Path of the unreadable source.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Configuration is invalid or inaccessible.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Rendering could not produce a document.
    #[error("Render error: {0}")]
    Render(String),
}

impl Error {
    /// Check if the error might go away when the operation is retried.
    ///
    /// Only interrupted or timed-out I/O qualifies; everything else is permanent.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Io(e) | Self::Source { source: e, .. } => matches!(
                e.kind(),
                std::io::ErrorKind::TimedOut | std::io::ErrorKind::Interrupted
            ),
            _ => false,
        }
    }

    /// Get the error category as a string identifier.
    ///
    /// - `"io"` - output sink and file system operations
    /// - `"source"` - unreadable input sources
    /// - `"config"` - configuration and settings
    /// - `"render"` - document rendering
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::Source { .. } => "source",
            Self::Config(_) => "config",
            Self::Render(_) => "render",
        }
    }

    /// Whether the error means an input source is missing altogether.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Io(e) | Self::Source { source: e, .. } => {
                e.kind() == std::io::ErrorKind::NotFound
            },
            _ => false,
        }
    }
}

/// Convenience type alias for Results with our Error type.
pub type Result<T> = std::result::Result<T, Error>;

//! # helpidx-core
//!
//! Core functionality for helpidx - a builder for cross-referenced concept
//! help indexes.
//!
//! Concept listings associate a document (a manual page or an example file)
//! with `;`-separated concept tags, each optionally split by `^` into a
//! primary and a secondary key. This crate folds any number of listings into
//! one three-level index and renders it as a single HTML page with an
//! alphabetical jump bar.
//!
//! ## Architecture
//!
//! - **Parsing**: one record line into zero or more [`ConceptAssociation`]s
//! - **Index**: the [`ConceptIndex`] aggregate with its overwrite rules
//! - **Ordering**: the case-insensitive comparator shared by every sort
//! - **Rendering**: [`HtmlRenderer`] writes the finished index to any sink
//! - **Building**: [`IndexBuilder`] and [`build_index`] drive the two phases
//! - **Configuration**: [`Config`] names the root, inputs, output and page text
//!
//! ## Quick Start
//!
//! ```rust
//! use helpidx_core::{HtmlRenderer, IndexBuilder, Result};
//!
//! let mut builder = IndexBuilder::new();
//! builder.ingest_str("manconcepts", "man/VecCreate.html Vectors^creating\n");
//! let output = builder.finish();
//!
//! let html = HtmlRenderer::default().render_to_string(&output.index)?;
//! assert!(html.contains("VecCreate"));
//! # Ok::<(), helpidx_core::Error>(())
//! ```

/// Two-phase index construction from concept listings
pub mod builder;
/// Build configuration
pub mod config;
/// Error types and result aliases
pub mod error;
/// Three-level concept index
pub mod index;
/// Case-insensitive ordering policy
pub mod ordering;
/// Record parser for concept listing lines
pub mod parser;
/// HTML rendering of a finished index
pub mod render;
/// Core data types
pub mod types;

pub use builder::{BuildOutput, IndexBuilder, build_index};
pub use config::Config;
pub use error::{Error, Result};
pub use index::{ConceptIndex, InsertOutcome};
pub use parser::{ParsedLine, parse_line, parse_record};
pub use render::{HtmlRenderer, RenderOptions};
pub use types::*;

//! Command implementations.

pub mod build;

pub use build::{BuildRequest, Sink, execute};

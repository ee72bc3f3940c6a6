//! Shared CLI helpers.

pub mod fs;
pub mod logging;

pub use logging::initialize_logging;

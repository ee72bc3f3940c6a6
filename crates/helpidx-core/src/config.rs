//! Configuration for a help-index build.
//!
//! Settings are stored in TOML. Every field has a default matching the
//! conventional documentation tree layout, so an empty file is valid.
//!
//! ## Example Configuration File
//!
//! ```toml
//! root = "/home/user/petsc"
//! inputs = ["docs/tex/exampleconcepts", "docs/tex/manconcepts"]
//! output = "docs/manualpages/help.html"
//!
//! [render]
//! title = "PETSc Help Index"
//! link_prefix = "../../"
//! ```
//!
//! ## Environment Overrides
//!
//! - `HELPIDX_ROOT`: replaces `root`
//! - `HELPIDX_OUTPUT`: replaces `output`

use crate::render::RenderOptions;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding [`Config::root`].
pub const ROOT_ENV: &str = "HELPIDX_ROOT";
/// Environment variable overriding [`Config::output`].
pub const OUTPUT_ENV: &str = "HELPIDX_OUTPUT";

/// Settings for one index build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Documentation root that relative inputs and output are resolved against.
    pub root: PathBuf,
    /// Concept listings to read, in order.
    pub inputs: Vec<PathBuf>,
    /// Where the rendered index is written.
    pub output: PathBuf,
    /// Page text and link settings.
    pub render: RenderOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            inputs: vec![
                PathBuf::from("docs/tex/exampleconcepts"),
                PathBuf::from("docs/tex/manconcepts"),
            ],
            output: PathBuf::from("docs/manualpages/help.html"),
            render: RenderOptions::default(),
        }
    }
}

impl Config {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("Failed to parse config: {e}")))
    }

    /// Load a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read config '{}': {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Load `path` when given, defaults otherwise; then apply environment overrides.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::load_from(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Save the configuration as pretty TOML.
    ///
    /// The file is written next to its destination first and then renamed into place.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| Error::Config(format!("Failed to create config directory: {e}")))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {e}")))?;

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .map_err(|e| Error::Config(format!("Failed to write config: {e}")))?;
        fs::rename(&tmp_path, path)
            .map_err(|e| Error::Config(format!("Failed to commit config: {e}")))?;
        Ok(())
    }

    /// Apply `HELPIDX_*` environment overrides.
    pub fn apply_env_overrides(&mut self) {
        if let Some(root) = std::env::var_os(ROOT_ENV).filter(|v| !v.is_empty()) {
            tracing::debug!(root = ?root, "root overridden from environment");
            self.root = PathBuf::from(root);
        }
        if let Some(output) = std::env::var_os(OUTPUT_ENV).filter(|v| !v.is_empty()) {
            tracing::debug!(output = ?output, "output overridden from environment");
            self.output = PathBuf::from(output);
        }
    }

    /// Absolute-or-root-relative path of the output file.
    pub fn output_path(&self) -> PathBuf {
        self.root.join(&self.output)
    }

    /// Root-relative paths of every input listing.
    pub fn input_paths(&self) -> Vec<PathBuf> {
        self.inputs.iter().map(|input| self.root.join(input)).collect()
    }
}

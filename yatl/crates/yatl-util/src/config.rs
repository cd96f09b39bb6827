//! Configuration for the scanner front end.
//!
//! Settings live in a `yatl.toml` file. Every field has a default, so an
//! empty file (or no file) is a valid configuration.
//!
//! ```toml
//! [diagnostics]
//! panic_on_error = false
//! echo = true
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ConfigError, ConfigResult};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "yatl.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// How reported diagnostics are handled.
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

/// `[diagnostics]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiagnosticsConfig {
    /// Panic on the first reported error instead of recording it.
    #[serde(default)]
    pub panic_on_error: bool,

    /// Forward each diagnostic to the `log` facade as it is reported.
    #[serde(default)]
    pub echo: bool,
}

impl Config {
    /// Parse configuration from TOML text.
    ///
    /// # Examples
    ///
    /// ```
    /// use yatl_util::Config;
    ///
    /// let config = Config::from_toml_str("[diagnostics]\necho = true\n").unwrap();
    /// assert!(config.diagnostics.echo);
    /// assert!(!config.diagnostics.panic_on_error);
    /// ```
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load `yatl.toml` from `dir`, falling back to defaults when absent.
    pub fn load_or_default(dir: &Path) -> ConfigResult<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        match Self::load_from_path(&path) {
            Err(ConfigError::NotFound(_)) => Ok(Self::default()),
            other => other,
        }
    }

    /// Save configuration to a specific path.
    pub fn save_to_path(&self, path: &Path) -> ConfigResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

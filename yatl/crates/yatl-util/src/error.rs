//! Core error types for yatl-util crate
//!
//! Scan problems are not Rust errors; they are diagnostics collected by a
//! [`Handler`](crate::Handler). The types here cover the fallible plumbing
//! around the scanner.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for configuration loading and saving
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The requested configuration file does not exist
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Reading or writing the file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML for [`Config`](crate::Config)
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be rendered as TOML
    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

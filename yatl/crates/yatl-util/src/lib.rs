//! yatl-util - Core Utilities and Foundation Types
//!
//! Shared building blocks for the yatl front end:
//!
//! - [`span`] - source locations attached to tokens and diagnostics
//! - [`diagnostic`] - the [`Handler`] that collects scan errors, plus
//!   [`Diagnostic`], [`Level`] and [`DiagnosticCode`]
//! - [`config`] - `yatl.toml` loading
//! - [`error`] - `thiserror` error enums for the fallible plumbing

#![warn(missing_docs)]

pub mod config;
pub mod diagnostic;
pub mod error;
pub mod span;

pub use config::{Config, DiagnosticsConfig, CONFIG_FILE_NAME};
pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level};
pub use error::{ConfigError, ConfigResult};
pub use span::Span;

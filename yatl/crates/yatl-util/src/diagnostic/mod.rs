//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! The scanner never aborts on malformed input. Instead it hands every
//! problem to a [`Handler`], which records it and returns control, so one
//! pass surfaces every error. Whether any recorded error is fatal is the
//! caller's decision.
//!
//! # Examples
//!
//! ## Line-only reporting
//!
//! ```
//! use yatl_util::diagnostic::Handler;
//!
//! let mut handler = Handler::new();
//! handler.report_error(3, "Unexpected character.");
//!
//! assert!(handler.has_errors());
//! assert_eq!(
//!     handler.diagnostics()[0].to_string(),
//!     "[line 3] Error: Unexpected character."
//! );
//! ```
//!
//! ## Using the fluent builder API
//!
//! ```
//! use yatl_util::diagnostic::{DiagnosticBuilder, DiagnosticCode};
//! use yatl_util::Span;
//!
//! let diag = DiagnosticBuilder::error("Unterminated string.")
//!     .code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
//!     .span(Span::new(0, 4, 1, 1))
//!     .build();
//! assert_eq!(diag.span.line, 1);
//! ```

mod builder;
mod codes;

pub use builder::DiagnosticBuilder;
pub use codes::DiagnosticCode;

use crate::config::DiagnosticsConfig;
use crate::Span;
use std::fmt;

/// Diagnostic severity level
///
/// # Examples
///
/// ```
/// use yatl_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert!(Level::Error.is_error());
/// assert!(!Level::Warning.is_error());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// An error; the input is malformed
    Error,
    /// Suspicious but well-formed input
    Warning,
    /// Additional information about a diagnostic
    Note,
}

impl Level {
    /// Returns true if this level represents an error
    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Level::Error)
    }

    /// Capitalised name used in rendered reports.
    pub const fn title(&self) -> &'static str {
        match self {
            Level::Error => "Error",
            Level::Warning => "Warning",
            Level::Note => "Note",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
            Level::Note => write!(f, "note"),
        }
    }
}

/// A diagnostic message with severity and location
///
/// Renders in the classic `[line N] Error: message` shape.
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
            notes: Vec::new(),
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Warning, message, span)
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a note to the diagnostic
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// The 1-based line the diagnostic points at.
    pub fn line(&self) -> u32 {
        self.span.line
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[line {}] {}: {}",
            self.span.line,
            self.level.title(),
            self.message
        )
    }
}

/// Handler for collecting and reporting diagnostics
///
/// Diagnostics are kept in emission order. Reporting always returns
/// normally unless the handler was built in panicking mode, which exists
/// for tests that want the first error to fail loudly.
///
/// # Examples
///
/// ```
/// use yatl_util::diagnostic::Handler;
///
/// let mut handler = Handler::new();
/// handler.report_error(1, "Unexpected character.");
/// handler.report_error(4, "Unterminated string.");
///
/// assert_eq!(handler.error_count(), 2);
/// let lines: Vec<u32> = handler.diagnostics().iter().map(|d| d.line()).collect();
/// assert_eq!(lines, vec![1, 4]);
/// ```
#[derive(Debug, Default)]
pub struct Handler {
    /// Collected diagnostics
    diagnostics: Vec<Diagnostic>,
    /// Whether to panic on errors (for testing)
    panic_on_error: bool,
    /// Whether to forward each diagnostic to the `log` facade
    echo: bool,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a handler that panics on errors (for testing)
    pub fn new_panicking() -> Self {
        Self {
            panic_on_error: true,
            ..Self::default()
        }
    }

    /// Create a handler from the `[diagnostics]` configuration section.
    pub fn with_config(config: &DiagnosticsConfig) -> Self {
        Self {
            diagnostics: Vec::new(),
            panic_on_error: config.panic_on_error,
            echo: config.echo,
        }
    }

    /// Report an error that only knows its line.
    ///
    /// This is the scanner-facing reporting surface: it records the error
    /// and returns, so the caller keeps scanning.
    pub fn report_error(&mut self, line: u32, message: impl Into<String>) {
        self.emit(Diagnostic::error(message, Span::point(line, 0)));
    }

    /// Emit a pre-built diagnostic
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        if self.echo {
            match diagnostic.level {
                Level::Error => log::error!("{}", diagnostic),
                Level::Warning => log::warn!("{}", diagnostic),
                Level::Note => log::info!("{}", diagnostic),
            }
        }
        if self.panic_on_error && diagnostic.level.is_error() {
            panic!("Diagnostic error: {}", diagnostic);
        }
        self.diagnostics.push(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.level.is_error())
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.level == Level::Error)
            .count()
    }

    /// Get the number of warnings
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.level == Level::Warning)
            .count()
    }

    /// Get all diagnostics, oldest first
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Drain the collected diagnostics, leaving the handler empty.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Clear all diagnostics
    pub fn clear(&mut self) {
        self.diagnostics.clear();
    }
}

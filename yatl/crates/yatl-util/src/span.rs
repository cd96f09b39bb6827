//! Span module - Source location tracking.
//!
//! A [`Span`] records where a lexeme or diagnostic lives in the source text:
//! a half-open byte range plus the human-readable line and column of its
//! first character.
//!
//! # Examples
//!
//! ```
//! use yatl_util::span::Span;
//!
//! let span = Span::new(4, 7, 2, 1);
//! assert_eq!(span.len(), 3);
//! assert_eq!(span.line, 2);
//! ```

use std::fmt;

/// Source location span
///
/// A `Span` represents a range in source code, identified by:
/// - Byte offsets (`start`, `end`), end exclusive
/// - Line and column numbers of the first character (1-based)
///
/// # Examples
///
/// ```
/// use yatl_util::span::Span;
///
/// let span = Span::new(10, 20, 1, 5);
/// assert_eq!(span.start, 10);
/// assert_eq!(span.end, 20);
///
/// let point = Span::point(3, 1);
/// assert!(point.is_empty());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, in characters)
    pub column: u32,
}

impl Span {
    /// Dummy span for diagnostics that have no source location.
    ///
    /// # Examples
    ///
    /// ```
    /// use yatl_util::span::Span;
    ///
    /// assert_eq!(Span::DUMMY.start, 0);
    /// assert_eq!(Span::DUMMY.line, 0);
    /// ```
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    #[inline]
    pub const fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Create a span that only knows its line and column.
    ///
    /// Used for diagnostics reported through the line-only
    /// [`Handler::report_error`](crate::Handler::report_error) surface.
    #[inline]
    pub const fn point(line: u32, column: u32) -> Self {
        Self {
            start: 0,
            end: 0,
            line,
            column,
        }
    }

    /// Returns true if this span covers no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in bytes
    ///
    /// # Examples
    ///
    /// ```
    /// use yatl_util::span::Span;
    ///
    /// let span = Span::new(10, 20, 1, 5);
    /// assert_eq!(span.len(), 10);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if this span contains a byte offset
    #[inline]
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Extend this span up to the end of `other`.
    ///
    /// The line and column stay those of `self`, since they describe the
    /// first character.
    ///
    /// # Examples
    ///
    /// ```
    /// use yatl_util::span::Span;
    ///
    /// let open = Span::new(0, 1, 1, 1);
    /// let close = Span::new(8, 9, 2, 3);
    /// let whole = open.to(close);
    /// assert_eq!((whole.start, whole.end), (0, 9));
    /// assert_eq!(whole.line, 1);
    /// ```
    #[inline]
    pub fn to(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
            line: self.line,
            column: self.column,
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

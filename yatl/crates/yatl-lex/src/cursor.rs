//! Character cursor for traversing source code.
//!
//! The cursor owns the read position of one scan together with the running
//! line and column. Every consumed `'\n'` bumps the line, wherever it
//! occurs, so the scanner never has to count lines itself.

/// A cursor for traversing source code character by character.
///
/// Positions are byte offsets into the source. Reads past the end yield the
/// sentinel `'\0'`; the position itself never moves backwards.
///
/// # Example
///
/// ```
/// use yatl_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("!=");
/// assert_eq!(cursor.advance(), '!');
/// assert!(cursor.match_char('='));
/// assert!(cursor.is_at_end());
/// assert_eq!(cursor.peek(), '\0');
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Byte offset of the next character to read.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the character at the cursor without consuming it.
    ///
    /// Returns `'\0'` at the end of the source.
    #[inline]
    pub fn peek(&self) -> char {
        // Fast path for ASCII
        match self.source.as_bytes().get(self.position) {
            None => '\0',
            Some(&b) if b < 128 => b as char,
            Some(_) => self.remaining().chars().next().unwrap_or('\0'),
        }
    }

    /// Returns the character after the current one without consuming
    /// anything, or `'\0'` if there is none.
    ///
    /// ```
    /// use yatl_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("1.5");
    /// assert_eq!(cursor.peek(), '1');
    /// assert_eq!(cursor.peek_next(), '.');
    /// assert_eq!(Cursor::new("1").peek_next(), '\0');
    /// ```
    #[inline]
    pub fn peek_next(&self) -> char {
        let mut chars = self.remaining().chars();
        chars.next();
        chars.next().unwrap_or('\0')
    }

    /// Consumes and returns the current character.
    ///
    /// Updates line and column tracking. At the end of the source nothing
    /// moves and `'\0'` is returned.
    pub fn advance(&mut self) -> char {
        let Some(c) = self.remaining().chars().next() else {
            return '\0';
        };

        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        c
    }

    /// Consumes the current character if it equals `expected`.
    ///
    /// The end-of-input check runs before the comparison, so a source that
    /// itself contains `'\0'` is never confused with the sentinel.
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.peek() != expected {
            return false;
        }
        self.advance();
        true
    }

    /// Returns true once every character has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Current column number (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Byte offset of the next character to read.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Source text from byte `start` up to the cursor.
    ///
    /// `start` must be a character boundary at or before the cursor.
    ///
    /// ```
    /// use yatl_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("<= 1");
    /// cursor.advance();
    /// cursor.advance();
    /// assert_eq!(cursor.slice_from(0), "<=");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Unread remainder of the source.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// The full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }
}

//! Token definitions.
//!
//! A [`Token`] is an immutable record of one lexeme: its [`TokenKind`], the
//! exact source text, an optional decoded [`Literal`], and where it starts.

use std::fmt;

use yatl_util::Span;

/// Lexeme categories.
///
/// This set is closed: the scanner never produces anything outside it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Single-character tokens.
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `-`
    Minus,
    /// `+`
    Plus,
    /// `;`
    Semicolon,
    /// `/`
    Slash,
    /// `*`
    Star,

    // One or two character tokens.
    /// `!`
    Bang,
    /// `!=`
    BangEqual,
    /// `=`
    Equal,
    /// `==`
    EqualEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,

    // Literals.
    /// A double-quoted string literal
    String,
    /// A decimal number literal
    Number,

    /// End of input
    Eof,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 22] = [
        TokenKind::LeftParen,
        TokenKind::RightParen,
        TokenKind::LeftBrace,
        TokenKind::RightBrace,
        TokenKind::Comma,
        TokenKind::Dot,
        TokenKind::Minus,
        TokenKind::Plus,
        TokenKind::Semicolon,
        TokenKind::Slash,
        TokenKind::Star,
        TokenKind::Bang,
        TokenKind::BangEqual,
        TokenKind::Equal,
        TokenKind::EqualEqual,
        TokenKind::Less,
        TokenKind::LessEqual,
        TokenKind::Greater,
        TokenKind::GreaterEqual,
        TokenKind::String,
        TokenKind::Number,
        TokenKind::Eof,
    ];

    /// Fixed source text of punctuation and operator kinds.
    ///
    /// Returns `None` for literals and end of input, whose text varies.
    ///
    /// # Examples
    ///
    /// ```
    /// use yatl_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::GreaterEqual.as_str(), Some(">="));
    /// assert_eq!(TokenKind::Number.as_str(), None);
    /// ```
    pub const fn as_str(&self) -> Option<&'static str> {
        Some(match self {
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::LeftBrace => "{",
            TokenKind::RightBrace => "}",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::Minus => "-",
            TokenKind::Plus => "+",
            TokenKind::Semicolon => ";",
            TokenKind::Slash => "/",
            TokenKind::Star => "*",
            TokenKind::Bang => "!",
            TokenKind::BangEqual => "!=",
            TokenKind::Equal => "=",
            TokenKind::EqualEqual => "==",
            TokenKind::Less => "<",
            TokenKind::LessEqual => "<=",
            TokenKind::Greater => ">",
            TokenKind::GreaterEqual => ">=",
            TokenKind::String | TokenKind::Number | TokenKind::Eof => return None,
        })
    }

    /// Returns true for kinds that carry a decoded [`Literal`].
    pub const fn is_literal(&self) -> bool {
        matches!(self, TokenKind::String | TokenKind::Number)
    }

    /// Upper snake case name, as used in token dumps.
    pub const fn name(&self) -> &'static str {
        match self {
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::LeftBrace => "LEFT_BRACE",
            TokenKind::RightBrace => "RIGHT_BRACE",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::Minus => "MINUS",
            TokenKind::Plus => "PLUS",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Slash => "SLASH",
            TokenKind::Star => "STAR",
            TokenKind::Bang => "BANG",
            TokenKind::BangEqual => "BANG_EQUAL",
            TokenKind::Equal => "EQUAL",
            TokenKind::EqualEqual => "EQUAL_EQUAL",
            TokenKind::Less => "LESS",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::Greater => "GREATER",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Decoded value of a literal token.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Literal<'src> {
    /// Value of a numeric literal
    Number(f64),
    /// Raw text between the quotes of a string literal
    String(&'src str),
}

impl<'src> Literal<'src> {
    /// The numeric value, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match *self {
            Literal::Number(n) => Some(n),
            Literal::String(_) => None,
        }
    }

    /// The string value, if this is a string.
    pub fn as_str(&self) -> Option<&'src str> {
        match *self {
            Literal::String(s) => Some(s),
            Literal::Number(_) => None,
        }
    }
}

impl fmt::Display for Literal<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Debug keeps the fractional part: 123.0 rather than 123.
            Literal::Number(n) => write!(f, "{:?}", n),
            Literal::String(s) => f.write_str(s),
        }
    }
}

/// One lexical unit.
///
/// The lexeme and any string literal borrow from the scanned source.
///
/// # Examples
///
/// ```
/// use yatl_lex::{Literal, TokenKind};
/// use yatl_util::Handler;
///
/// let mut handler = Handler::new();
/// let tokens = yatl_lex::tokenize("12.5", &mut handler);
///
/// assert_eq!(tokens[0].kind, TokenKind::Number);
/// assert_eq!(tokens[0].lexeme, "12.5");
/// assert_eq!(tokens[0].literal, Some(Literal::Number(12.5)));
/// assert_eq!(tokens[0].to_string(), "NUMBER 12.5 12.5");
/// assert!(tokens[1].is_eof());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Token<'src> {
    /// Lexeme category
    pub kind: TokenKind,
    /// Exact source text of the token (empty for [`TokenKind::Eof`])
    pub lexeme: &'src str,
    /// Decoded value for string and number tokens
    pub literal: Option<Literal<'src>>,
    /// 1-based line of the token's first character
    pub line: u32,
    /// Byte range and start position in the source
    pub span: Span,
}

impl<'src> Token<'src> {
    /// Create a token; `line` is taken from `span`.
    pub fn new(
        kind: TokenKind,
        lexeme: &'src str,
        literal: Option<Literal<'src>>,
        span: Span,
    ) -> Self {
        Self {
            kind,
            lexeme,
            literal,
            line: span.line,
            span,
        }
    }

    /// The end-of-input marker at byte `offset` on `line`.
    pub fn eof(line: u32, column: u32, offset: usize) -> Self {
        Self::new(
            TokenKind::Eof,
            "",
            None,
            Span::new(offset, offset, line, column),
        )
    }

    /// Returns true for the end-of-input marker.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.literal {
            Some(literal) => write!(f, "{} {} {}", self.kind, self.lexeme, literal),
            None => write!(f, "{} {} null", self.kind, self.lexeme),
        }
    }
}

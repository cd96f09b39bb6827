//! Scanner module.
//!
//! The scanner implementation is split into focused components:
//! - `core` - `Scanner` struct, the scan loop and per-character dispatch
//! - `operator` - one-or-two character operators and line comments
//! - `number` - number literal decoding
//! - `string` - string literal scanning

mod core;
mod number;
mod operator;
mod string;

pub use self::core::Scanner;

use yatl_util::Handler;

use crate::token::Token;

/// Scans `source` in one pass, reporting malformed lexemes to `handler`.
///
/// The returned sequence always ends with exactly one end-of-input token,
/// whatever errors were reported along the way.
///
/// # Example
///
/// ```
/// use yatl_lex::{tokenize, TokenKind};
/// use yatl_util::Handler;
///
/// let mut handler = Handler::new();
/// let kinds: Vec<TokenKind> = tokenize("1 != 2", &mut handler)
///     .iter()
///     .map(|t| t.kind)
///     .collect();
///
/// assert_eq!(
///     kinds,
///     vec![TokenKind::Number, TokenKind::BangEqual, TokenKind::Number, TokenKind::Eof]
/// );
/// assert!(!handler.has_errors());
/// ```
pub fn tokenize<'src>(source: &'src str, handler: &mut Handler) -> Vec<Token<'src>> {
    Scanner::new(source, handler).scan_tokens()
}

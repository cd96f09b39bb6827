//! Core scanner implementation.
//!
//! This module contains the `Scanner` struct, the top-level scan loop and
//! the per-character dispatch.

use yatl_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};

use crate::cursor::Cursor;
use crate::token::{Literal, Token, TokenKind};

/// Scanner for yatl source text.
///
/// A scanner is built for one source, consumed by [`Scanner::scan_tokens`],
/// and then gone, so two scans can never observe each other's cursor.
/// Malformed lexemes are reported to the borrowed [`Handler`] and skipped.
///
/// # Example
///
/// ```
/// use yatl_lex::{Scanner, TokenKind};
/// use yatl_util::Handler;
///
/// let mut handler = Handler::new();
/// let tokens = Scanner::new("(# )", &mut handler).scan_tokens();
///
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[0].kind, TokenKind::LeftParen);
/// assert_eq!(tokens[1].kind, TokenKind::RightParen);
/// assert_eq!(tokens[2].kind, TokenKind::Eof);
/// assert_eq!(handler.error_count(), 1);
/// ```
pub struct Scanner<'src, 'h> {
    /// Character cursor; its position is the `current` index.
    pub(super) cursor: Cursor<'src>,

    /// Error reporting collaborator.
    handler: &'h mut Handler,

    /// Tokens produced so far, in source order.
    tokens: Vec<Token<'src>>,

    /// Byte offset of the first character of the current lexeme.
    pub(super) start: usize,

    /// Line of the first character of the current lexeme.
    start_line: u32,

    /// Column of the first character of the current lexeme.
    start_column: u32,
}

impl<'src, 'h> Scanner<'src, 'h> {
    /// Creates a scanner over `source` that reports into `handler`.
    pub fn new(source: &'src str, handler: &'h mut Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            tokens: Vec::new(),
            start: 0,
            start_line: 1,
            start_column: 1,
        }
    }

    /// Scans the whole source and returns the token sequence.
    ///
    /// The last element is always the single end-of-input token, carrying
    /// the final line number.
    pub fn scan_tokens(mut self) -> Vec<Token<'src>> {
        log::debug!("scanning {} bytes", self.cursor.source().len());
        let errors_before = self.handler.error_count();

        while !self.cursor.is_at_end() {
            self.begin_lexeme();
            self.scan_token();
        }

        self.tokens.push(Token::eof(
            self.cursor.line(),
            self.cursor.column(),
            self.cursor.position(),
        ));

        log::debug!(
            "scanned {} tokens over {} lines, {} errors",
            self.tokens.len(),
            self.cursor.line(),
            self.handler.error_count() - errors_before
        );
        self.tokens
    }

    fn begin_lexeme(&mut self) {
        self.start = self.cursor.position();
        self.start_line = self.cursor.line();
        self.start_column = self.cursor.column();
    }

    /// Consumes one lexeme starting at `start`.
    fn scan_token(&mut self) {
        let c = self.cursor.advance();
        match c {
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            '-' => self.add_token(TokenKind::Minus),
            '+' => self.add_token(TokenKind::Plus),
            ';' => self.add_token(TokenKind::Semicolon),
            '*' => self.add_token(TokenKind::Star),
            '!' => self.one_or_two('=', TokenKind::BangEqual, TokenKind::Bang),
            '=' => self.one_or_two('=', TokenKind::EqualEqual, TokenKind::Equal),
            '<' => self.one_or_two('=', TokenKind::LessEqual, TokenKind::Less),
            '>' => self.one_or_two('=', TokenKind::GreaterEqual, TokenKind::Greater),
            '/' => self.slash_or_comment(),
            // The cursor already counted the line for '\n'.
            ' ' | '\r' | '\t' | '\n' => {},
            '"' => self.string(),
            c if c.is_ascii_digit() => self.number(),
            _ => self.report(
                DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
                "Unexpected character.",
            ),
        }
    }

    /// Appends a token without a literal value.
    pub(super) fn add_token(&mut self, kind: TokenKind) {
        self.add_literal_token(kind, None);
    }

    /// Appends a token for the lexeme `start..current`.
    pub(super) fn add_literal_token(&mut self, kind: TokenKind, literal: Option<Literal<'src>>) {
        let span = Span::new(
            self.start,
            self.cursor.position(),
            self.start_line,
            self.start_column,
        );
        let token = Token::new(kind, self.cursor.slice_from(self.start), literal, span);
        log::trace!("{} at {}", token, span);
        self.tokens.push(token);
    }

    /// Reports a problem with the current lexeme and returns so scanning
    /// can continue.
    ///
    /// The diagnostic carries the line the cursor is on when the problem is
    /// detected, which for an unterminated string is the last line.
    pub(super) fn report(&mut self, code: DiagnosticCode, message: impl Into<String>) {
        let line = self.cursor.line();
        let column = if line == self.start_line {
            self.start_column
        } else {
            self.cursor.column()
        };
        let span = Span::new(self.start, self.cursor.position(), line, column);

        DiagnosticBuilder::error(message)
            .code(code)
            .span(span)
            .emit(self.handler);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(source: &str) -> (Vec<Token<'_>>, Handler) {
        let mut handler = Handler::new();
        let tokens = Scanner::new(source, &mut handler).scan_tokens();
        (tokens, handler)
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        scan(source).0.iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_single_character_tokens() {
        assert_eq!(
            kinds("(){},.-+;*"),
            vec![
                TokenKind::LeftParen,
                TokenKind::RightParen,
                TokenKind::LeftBrace,
                TokenKind::RightBrace,
                TokenKind::Comma,
                TokenKind::Dot,
                TokenKind::Minus,
                TokenKind::Plus,
                TokenKind::Semicolon,
                TokenKind::Star,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_lexemes_and_spans() {
        let (tokens, _) = scan("( <=");
        assert_eq!(tokens[0].lexeme, "(");
        assert_eq!(tokens[0].span, Span::new(0, 1, 1, 1));
        assert_eq!(tokens[1].lexeme, "<=");
        assert_eq!(tokens[1].span, Span::new(2, 4, 1, 3));
    }

    #[test]
    fn test_whitespace_produces_nothing() {
        assert_eq!(kinds(" \r\t \n "), vec![TokenKind::Eof]);
    }

    #[test]
    fn test_newlines_advance_line() {
        let (tokens, _) = scan("+\n-\n\n*");
        let lines: Vec<u32> = tokens.iter().map(|t| t.line).collect();
        assert_eq!(lines, vec![1, 2, 4, 4]);
    }

    #[test]
    fn test_unexpected_character_is_reported_and_skipped() {
        let (tokens, handler) = scan("+@-");
        assert_eq!(
            tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![TokenKind::Plus, TokenKind::Minus, TokenKind::Eof]
        );

        let diags = handler.diagnostics();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].message, "Unexpected character.");
        assert_eq!(diags[0].code, Some(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR));
        assert_eq!(diags[0].span, Span::new(1, 2, 1, 2));
    }

    #[test]
    fn test_every_bad_character_is_reported() {
        let (tokens, handler) = scan("#\n$ %");
        assert_eq!(tokens.len(), 1);
        let lines: Vec<u32> = handler.diagnostics().iter().map(|d| d.line()).collect();
        assert_eq!(lines, vec![1, 2, 2]);
    }

    #[test]
    fn test_non_ascii_character_reported_once() {
        let (tokens, handler) = scan("é+");
        assert_eq!(tokens[0].kind, TokenKind::Plus);
        assert_eq!(tokens[0].span.start, 2);
        assert_eq!(handler.error_count(), 1);
    }

    #[test]
    fn test_letters_are_unexpected() {
        let (tokens, handler) = scan("a1");
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(handler.error_count(), 1);
    }

    #[test]
    fn test_eof_position() {
        let (tokens, _) = scan("1\n22");
        let eof = tokens.last().unwrap();
        assert!(eof.is_eof());
        assert_eq!(eof.line, 2);
        assert_eq!(eof.span.start, 4);
        assert_eq!(eof.span.column, 3);
    }

    #[test]
    fn test_handler_errors_from_earlier_scans_are_kept() {
        let mut handler = Handler::new();
        handler.report_error(9, "earlier");
        let tokens = Scanner::new("?", &mut handler).scan_tokens();
        assert_eq!(tokens.len(), 1);
        assert_eq!(handler.error_count(), 2);
    }
}

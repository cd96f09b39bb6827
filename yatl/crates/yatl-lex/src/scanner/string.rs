//! String literal lexing.

use yatl_util::DiagnosticCode;

use super::Scanner;
use crate::token::{Literal, TokenKind};

impl<'src, 'h> Scanner<'src, 'h> {
    /// Lexes a string literal whose opening quote is already consumed.
    ///
    /// Strings may span lines and have no escape sequences; the literal
    /// value is the raw text between the quotes. Without a closing quote
    /// the error is reported on the last line and no token is emitted.
    pub(super) fn string(&mut self) {
        while self.cursor.peek() != '"' && !self.cursor.is_at_end() {
            self.cursor.advance();
        }

        if self.cursor.is_at_end() {
            self.report(
                DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
                "Unterminated string.",
            );
            return;
        }

        // The closing quote.
        self.cursor.advance();

        // Both quotes are one byte wide.
        let value = &self.cursor.source()[self.start + 1..self.cursor.position() - 1];
        self.add_literal_token(TokenKind::String, Some(Literal::String(value)));
    }
}

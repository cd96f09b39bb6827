//! Number literal lexing.

use yatl_util::DiagnosticCode;

use super::Scanner;
use crate::token::{Literal, TokenKind};

impl<'src, 'h> Scanner<'src, 'h> {
    /// Lexes a number literal whose first digit is already consumed.
    ///
    /// # Number Format
    ///
    /// - Integer part: `42`, `007`
    /// - Optional fraction: `3.14`; a `.` not followed by a digit is left
    ///   for the next token, so `123.` is a number then a dot
    ///
    /// No sign, exponent or radix prefix. The value is the IEEE-754 double
    /// nearest to the text; digit runs too large for `f64` decode to
    /// infinity.
    pub(super) fn number(&mut self) {
        self.digits();

        if self.cursor.peek() == '.' && self.cursor.peek_next().is_ascii_digit() {
            self.cursor.advance();
            self.digits();
        }

        let text = self.cursor.slice_from(self.start);
        match text.parse::<f64>() {
            Ok(value) => self.add_literal_token(TokenKind::Number, Some(Literal::Number(value))),
            Err(e) => self.report(
                DiagnosticCode::E_LEXER_INVALID_NUMBER,
                format!("Invalid number literal '{}': {}", text, e),
            ),
        }
    }

    fn digits(&mut self) {
        while self.cursor.peek().is_ascii_digit() {
            self.cursor.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::token::{Literal, Token, TokenKind};
    use crate::Scanner;
    use yatl_util::Handler;

    fn scan(source: &str) -> Vec<Token<'_>> {
        let mut handler = Handler::new();
        let tokens = Scanner::new(source, &mut handler).scan_tokens();
        assert!(!handler.has_errors());
        tokens
    }

    fn number(source: &str) -> f64 {
        let tokens = scan(source);
        assert_eq!(tokens[0].kind, TokenKind::Number);
        match tokens[0].literal {
            Some(Literal::Number(n)) => n,
            other => panic!("expected number literal, got {:?}", other),
        }
    }

    #[test]
    fn test_integer() {
        assert_eq!(number("123"), 123.0);
        assert_eq!(number("0"), 0.0);
        assert_eq!(number("007"), 7.0);
    }

    #[test]
    fn test_fraction() {
        assert_eq!(number("123.45"), 123.45);
        assert_eq!(number("0.5"), 0.5);
    }

    #[test]
    fn test_lexeme_is_source_text() {
        let tokens = scan("3.140");
        assert_eq!(tokens[0].lexeme, "3.140");
        assert_eq!(tokens[0].literal, Some(Literal::Number(3.14)));
    }

    #[test]
    fn test_trailing_dot_is_separate_token() {
        let tokens = scan("123.");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].lexeme, "123");
        assert_eq!(tokens[0].literal, Some(Literal::Number(123.0)));
        assert_eq!(tokens[1].kind, TokenKind::Dot);
        assert!(tokens[2].is_eof());
    }

    #[test]
    fn test_dot_then_non_digit() {
        let kinds: Vec<_> = scan("1.+").iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![TokenKind::Number, TokenKind::Dot, TokenKind::Plus, TokenKind::Eof]
        );
    }

    #[test]
    fn test_second_dot_starts_new_token() {
        let tokens = scan("1.2.3");
        assert_eq!(tokens[0].lexeme, "1.2");
        assert_eq!(tokens[1].kind, TokenKind::Dot);
        assert_eq!(tokens[2].lexeme, "3");
    }

    #[test]
    fn test_leading_dot_is_not_a_number() {
        let tokens = scan(".5");
        assert_eq!(tokens[0].kind, TokenKind::Dot);
        assert_eq!(tokens[1].literal, Some(Literal::Number(5.0)));
    }

    #[test]
    fn test_minus_is_separate() {
        let tokens = scan("-7");
        assert_eq!(tokens[0].kind, TokenKind::Minus);
        assert_eq!(tokens[1].literal, Some(Literal::Number(7.0)));
    }

    #[test]
    fn test_huge_number_is_infinite() {
        let source = "9".repeat(400);
        assert!(number(&source).is_infinite());
    }
}

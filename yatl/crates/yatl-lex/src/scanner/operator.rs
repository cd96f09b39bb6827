//! Operator and comment lexing.
//!
//! Handles the operators that may take a trailing `=`, and `/`, which is
//! either division or the start of a line comment.

use super::Scanner;
use crate::token::TokenKind;

impl<'src, 'h> Scanner<'src, 'h> {
    /// Emits `matched` if the next character is `expected` (consuming it),
    /// otherwise `otherwise`.
    ///
    /// Handles: `!` `!=`, `=` `==`, `<` `<=`, `>` `>=`
    pub(super) fn one_or_two(&mut self, expected: char, matched: TokenKind, otherwise: TokenKind) {
        let kind = if self.cursor.match_char(expected) {
            matched
        } else {
            otherwise
        };
        self.add_token(kind);
    }

    /// Lexes slash or skips a line comment.
    ///
    /// Handles: `/`, `//`
    pub(super) fn slash_or_comment(&mut self) {
        if self.cursor.match_char('/') {
            self.line_comment();
        } else {
            self.add_token(TokenKind::Slash);
        }
    }

    /// Skips to the end of the line, leaving the newline for the main loop.
    fn line_comment(&mut self) {
        while self.cursor.peek() != '\n' && !self.cursor.is_at_end() {
            self.cursor.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::token::{Token, TokenKind};
    use crate::Scanner;
    use yatl_util::Handler;

    fn scan(source: &str) -> Vec<Token<'_>> {
        let mut handler = Handler::new();
        let tokens = Scanner::new(source, &mut handler).scan_tokens();
        assert!(!handler.has_errors(), "unexpected errors for {:?}", source);
        tokens
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        scan(source).iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_two_character_operators() {
        assert_eq!(
            kinds("!= == <= >="),
            vec![
                TokenKind::BangEqual,
                TokenKind::EqualEqual,
                TokenKind::LessEqual,
                TokenKind::GreaterEqual,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_single_character_fallbacks() {
        assert_eq!(
            kinds("! = < >"),
            vec![
                TokenKind::Bang,
                TokenKind::Equal,
                TokenKind::Less,
                TokenKind::Greater,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_maximal_munch_prefers_longer() {
        assert_eq!(kinds("!="), vec![TokenKind::BangEqual, TokenKind::Eof]);
        assert_eq!(kinds("!"), vec![TokenKind::Bang, TokenKind::Eof]);
        // "===" is "==" then "="
        assert_eq!(
            kinds("==="),
            vec![TokenKind::EqualEqual, TokenKind::Equal, TokenKind::Eof]
        );
        // "!==" is "!=" then "="
        assert_eq!(
            kinds("!=="),
            vec![TokenKind::BangEqual, TokenKind::Equal, TokenKind::Eof]
        );
    }

    #[test]
    fn test_operator_at_end_of_input() {
        assert_eq!(kinds("<"), vec![TokenKind::Less, TokenKind::Eof]);
        assert_eq!(kinds(">"), vec![TokenKind::Greater, TokenKind::Eof]);
    }

    #[test]
    fn test_operator_lexemes() {
        let tokens = scan(">= >");
        assert_eq!(tokens[0].lexeme, ">=");
        assert_eq!(tokens[1].lexeme, ">");
    }

    #[test]
    fn test_division() {
        assert_eq!(
            kinds("1 / 2"),
            vec![TokenKind::Number, TokenKind::Slash, TokenKind::Number, TokenKind::Eof]
        );
    }

    #[test]
    fn test_line_comment_skipped() {
        let tokens = scan("1 // comment\n2");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].lexeme, "1");
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[1].lexeme, "2");
        assert_eq!(tokens[1].line, 2);
    }

    #[test]
    fn test_comment_to_end_of_input() {
        let tokens = scan("+ // trailing");
        assert_eq!(tokens.len(), 2);
        assert!(tokens[1].is_eof());
        assert_eq!(tokens[1].line, 1);
    }

    #[test]
    fn test_comment_may_hold_anything() {
        assert_eq!(kinds("// \"unterminated # @ é"), vec![TokenKind::Eof]);
    }

    #[test]
    fn test_adjacent_comments() {
        let tokens = scan("//a\n//b\n;");
        assert_eq!(tokens[0].kind, TokenKind::Semicolon);
        assert_eq!(tokens[0].line, 3);
    }

    #[test]
    fn test_slash_followed_by_space_slash() {
        assert_eq!(
            kinds("/ /"),
            vec![TokenKind::Slash, TokenKind::Slash, TokenKind::Eof]
        );
    }
}

//! yatl-lex - Lexical Scanner for the yatl language
//!
//! This crate turns yatl source text into the ordered token sequence the
//! parser consumes. It is the first phase of the interpreter pipeline.
//!
//! # Example Usage
//!
//! ```
//! use yatl_lex::{tokenize, Literal, TokenKind};
//! use yatl_util::Handler;
//!
//! let mut handler = Handler::new();
//! let tokens = tokenize("(1 + 2.5) // sum", &mut handler);
//!
//! assert_eq!(tokens.len(), 6);
//! assert_eq!(tokens[1].literal, Some(Literal::Number(1.0)));
//! assert_eq!(tokens[2].kind, TokenKind::Plus);
//! assert!(tokens.last().unwrap().is_eof());
//! assert!(!handler.has_errors());
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token, token kind and literal definitions
//! - [`cursor`] - Character cursor with line tracking
//! - [`scanner`] - The scanner itself
//!
//! # Token Categories
//!
//! ## Punctuation
//!
//! `(` `)` `{` `}` `,` `.` `-` `+` `;` `/` `*`
//!
//! ## Operators
//!
//! `!` `!=` `=` `==` `<` `<=` `>` `>=`, always taking the longer form when
//! the next character allows it.
//!
//! ## Literals
//!
//! - **Number**: `42`, `3.14` (decoded to `f64`)
//! - **String**: `"text"`, may span lines, no escapes
//!
//! ## Special
//!
//! - **EOF**: appended exactly once, as the last token
//!
//! `//` starts a comment running to the end of the line. Anything else is
//! reported as `Unexpected character.` and skipped.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod scanner;
pub mod token;

mod edge_cases;

pub use cursor::Cursor;
pub use scanner::{tokenize, Scanner};
pub use token::{Literal, Token, TokenKind};

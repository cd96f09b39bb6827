//! Edge case tests for yatl-lex

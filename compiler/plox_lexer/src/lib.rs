//! Lexer for plox source text.
//!
//! A single left-to-right pass over the bytes of the source with one byte of
//! lookahead (two for `.` followed by a digit). Whitespace and comments are
//! skipped; every other lexeme becomes a [`Token`]. The sequence always ends
//! with a [`TokenKind::Eof`](plox_ir::TokenKind::Eof) marker.
//!
//! Lexing stops at the first error.

mod cursor;
mod keywords;
pub mod lex_error;
mod scanner;

pub use lex_error::{LexError, LexErrorKind};

use plox_ir::Token;
use scanner::Scanner;

/// Tokenize `source`.
///
/// On success the last token is always `Eof`.
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::with_capacity(source.len() / 4 + 1);
    loop {
        let token = scanner.next_token()?;
        let done = token.is_eof();
        tokens.push(token);
        if done {
            break;
        }
    }
    tracing::debug!(count = tokens.len(), "lexed source");
    Ok(tokens)
}

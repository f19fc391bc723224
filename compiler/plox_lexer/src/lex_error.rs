//! Lexer error types.

use std::fmt;

use plox_ir::Span;

/// A scan error, located by byte span and line.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    pub span: Span,
    /// 1-based line active when the error was detected.
    pub line: u32,
    pub kind: LexErrorKind,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// Missing closing `"`.
    UnterminatedString,
    /// Missing closing `*/`.
    UnterminatedComment,
    /// A character no token starts with.
    UnexpectedCharacter(char),
    /// Integer literal does not fit in an `i64`.
    IntegerTooLarge,
}

impl LexError {
    #[cold]
    pub fn unterminated_string(span: Span, line: u32) -> Self {
        Self {
            span,
            line,
            kind: LexErrorKind::UnterminatedString,
        }
    }

    #[cold]
    pub fn unterminated_comment(span: Span, line: u32) -> Self {
        Self {
            span,
            line,
            kind: LexErrorKind::UnterminatedComment,
        }
    }

    #[cold]
    pub fn unexpected_character(span: Span, line: u32, ch: char) -> Self {
        Self {
            span,
            line,
            kind: LexErrorKind::UnexpectedCharacter(ch),
        }
    }

    #[cold]
    pub fn integer_too_large(span: Span, line: u32) -> Self {
        Self {
            span,
            line,
            kind: LexErrorKind::IntegerTooLarge,
        }
    }
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexErrorKind::UnterminatedString => write!(f, "unterminated string"),
            LexErrorKind::UnterminatedComment => write!(f, "unterminated block comment"),
            LexErrorKind::UnexpectedCharacter(ch) => write!(f, "unexpected character '{ch}'"),
            LexErrorKind::IntegerTooLarge => write!(f, "integer literal too large"),
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}] Error: {}", self.line, self.kind)
    }
}

impl std::error::Error for LexError {}

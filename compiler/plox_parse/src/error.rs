//! Parse error type.

use std::fmt;

use plox_diagnostic::ErrorCode;
use plox_ir::{Span, Token};

/// A parse error. Parsing stops at the first one.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ParseError {
    pub code: ErrorCode,
    pub message: String,
    pub span: Span,
    /// 1-based line of the offending token.
    pub line: u32,
    /// Lexeme of the offending token, `None` at end of input.
    pub found: Option<String>,
}

impl ParseError {
    /// Error reported at `token`.
    #[cold]
    pub fn at(code: ErrorCode, token: &Token, message: impl Into<String>) -> Self {
        ParseError {
            code,
            message: message.into(),
            span: token.span,
            line: token.line,
            found: if token.is_eof() {
                None
            } else {
                Some(token.lexeme.clone())
            },
        }
    }

    #[cold]
    pub fn unexpected(token: &Token, message: impl Into<String>) -> Self {
        Self::at(ErrorCode::E1001, token, message)
    }

    #[cold]
    pub fn invalid_assignment_target(equals: &Token) -> Self {
        Self::at(ErrorCode::E1002, equals, "invalid assignment target")
    }

    #[cold]
    pub fn too_many_parameters(token: &Token, max: usize) -> Self {
        Self::at(
            ErrorCode::E1003,
            token,
            format!("can't have more than {max} parameters"),
        )
    }

    /// Where the error happened, as `at 'lexeme'` or `at end`.
    pub fn location(&self) -> String {
        match &self.found {
            Some(lexeme) => format!("at '{lexeme}'"),
            None => "at end".to_string(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[line {}] Error {}: {}",
            self.line,
            self.location(),
            self.message
        )
    }
}

impl std::error::Error for ParseError {}

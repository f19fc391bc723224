//! Error codes for every plox diagnostic.
//!
//! The first digit names the phase that produced the error.

use std::fmt;

/// Error codes for all plox diagnostics.
///
/// Format: E#### where the first digit indicates phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - E6xxx: Runtime errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Unexpected character in source
    E0002,
    /// Unterminated block comment
    E0003,
    /// Integer literal does not fit in 64 bits
    E0004,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Invalid assignment target
    E1002,
    /// Too many parameters
    E1003,

    // Runtime Errors (E6xxx)
    /// Operand type mismatch
    E6001,
    /// Division by zero
    E6002,
    /// Undefined variable
    E6003,
    /// Value is not callable
    E6004,
    /// Wrong number of arguments
    E6005,
    /// `return` outside of a function
    E6006,
    /// `break` outside of a loop
    E6007,
    /// Property access on a non-instance
    E6008,
    /// Undefined property
    E6009,
    /// Integer overflow
    E6010,
    /// Shift amount out of range
    E6011,
    /// Call depth limit exceeded
    E6012,
    /// String result exceeds the size limit
    E6013,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E6004 => "E6004",
            ErrorCode::E6005 => "E6005",
            ErrorCode::E6006 => "E6006",
            ErrorCode::E6007 => "E6007",
            ErrorCode::E6008 => "E6008",
            ErrorCode::E6009 => "E6009",
            ErrorCode::E6010 => "E6010",
            ErrorCode::E6011 => "E6011",
            ErrorCode::E6012 => "E6012",
            ErrorCode::E6013 => "E6013",
        }
    }

    /// One-line description, used when a diagnostic has no custom message.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unterminated string literal",
            ErrorCode::E0002 => "unexpected character",
            ErrorCode::E0003 => "unterminated block comment",
            ErrorCode::E0004 => "integer literal too large",
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "invalid assignment target",
            ErrorCode::E1003 => "too many parameters",
            ErrorCode::E6001 => "type mismatch",
            ErrorCode::E6002 => "division by zero",
            ErrorCode::E6003 => "undefined variable",
            ErrorCode::E6004 => "value is not callable",
            ErrorCode::E6005 => "wrong number of arguments",
            ErrorCode::E6006 => "return outside of a function",
            ErrorCode::E6007 => "break outside of a loop",
            ErrorCode::E6008 => "only instances have properties",
            ErrorCode::E6009 => "undefined property",
            ErrorCode::E6010 => "integer overflow",
            ErrorCode::E6011 => "shift amount out of range",
            ErrorCode::E6012 => "maximum call depth exceeded",
            ErrorCode::E6013 => "string too long",
        }
    }

    pub fn is_lexer_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E0001 | ErrorCode::E0002 | ErrorCode::E0003 | ErrorCode::E0004
        )
    }

    pub fn is_parser_error(&self) -> bool {
        matches!(self, ErrorCode::E1001 | ErrorCode::E1002 | ErrorCode::E1003)
    }

    pub fn is_eval_error(&self) -> bool {
        !self.is_lexer_error() && !self.is_parser_error()
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests;

//! Runtime errors and the non-local exit signal.
//!
//! `EvalErrorKind` is the structured description of what went wrong;
//! [`ErrorCategory`] groups kinds into the categories reported to users, and
//! [`EvalErrorKind::code`] assigns each kind its E6xxx diagnostic code.
//! Construct errors through the `#[cold]` factory functions at the bottom of
//! this file.

use std::fmt;

use plox_diagnostic::ErrorCode;
use plox_ir::Span;

use crate::Value;

/// Result of evaluating an expression.
pub type EvalResult = Result<Value, EvalError>;

/// Result of executing a statement.
pub type ExecResult = Result<ControlFlow, EvalError>;

/// How a statement finished.
///
/// `Return` and `Break` unwind through enclosing blocks until a call or loop
/// consumes them.
#[derive(Clone, Debug, PartialEq)]
pub enum ControlFlow {
    Normal,
    Return(Value),
    Break,
}

/// User-facing error category.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    TypeError,
    DivisionByZeroError,
    NameError,
    RuntimeError,
}

impl ErrorCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCategory::TypeError => "TypeError",
            ErrorCategory::DivisionByZeroError => "DivisionByZeroError",
            ErrorCategory::NameError => "NameError",
            ErrorCategory::RuntimeError => "RuntimeError",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    // Operators
    BinaryTypeMismatch {
        op: &'static str,
        left: &'static str,
        right: &'static str,
    },
    InvalidUnaryOperand {
        op: &'static str,
        operand: &'static str,
    },
    DivisionByZero,
    IntegerOverflow {
        operation: &'static str,
    },
    ShiftOutOfRange {
        amount: i64,
    },
    StringTooLong {
        limit: usize,
    },

    // Names and properties
    UndefinedVariable {
        name: String,
    },
    NotAnInstance {
        type_name: &'static str,
    },
    UndefinedProperty {
        name: String,
    },

    // Calls
    NotCallable {
        type_name: &'static str,
    },
    ArityMismatch {
        expected: usize,
        got: usize,
    },
    InvalidArgument {
        function: &'static str,
        expected: &'static str,
        got: &'static str,
    },
    StackOverflow {
        depth: usize,
    },

    // Escaped control flow
    ReturnOutsideFunction,
    BreakOutsideLoop,
}

impl EvalErrorKind {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::BinaryTypeMismatch { .. }
            | Self::InvalidUnaryOperand { .. }
            | Self::NotAnInstance { .. }
            | Self::UndefinedProperty { .. }
            | Self::NotCallable { .. }
            | Self::ArityMismatch { .. }
            | Self::InvalidArgument { .. } => ErrorCategory::TypeError,
            Self::DivisionByZero => ErrorCategory::DivisionByZeroError,
            Self::UndefinedVariable { .. } => ErrorCategory::NameError,
            Self::IntegerOverflow { .. }
            | Self::ShiftOutOfRange { .. }
            | Self::StringTooLong { .. }
            | Self::StackOverflow { .. }
            | Self::ReturnOutsideFunction
            | Self::BreakOutsideLoop => ErrorCategory::RuntimeError,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::BinaryTypeMismatch { .. }
            | Self::InvalidUnaryOperand { .. }
            | Self::InvalidArgument { .. } => ErrorCode::E6001,
            Self::DivisionByZero => ErrorCode::E6002,
            Self::UndefinedVariable { .. } => ErrorCode::E6003,
            Self::NotCallable { .. } => ErrorCode::E6004,
            Self::ArityMismatch { .. } => ErrorCode::E6005,
            Self::ReturnOutsideFunction => ErrorCode::E6006,
            Self::BreakOutsideLoop => ErrorCode::E6007,
            Self::NotAnInstance { .. } => ErrorCode::E6008,
            Self::UndefinedProperty { .. } => ErrorCode::E6009,
            Self::IntegerOverflow { .. } => ErrorCode::E6010,
            Self::ShiftOutOfRange { .. } => ErrorCode::E6011,
            Self::StackOverflow { .. } => ErrorCode::E6012,
            Self::StringTooLong { .. } => ErrorCode::E6013,
        }
    }
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BinaryTypeMismatch { op, left, right } => {
                write!(f, "unsupported operand type(s) for {op}: {left} and {right}")
            }
            Self::InvalidUnaryOperand { op, operand } => {
                write!(f, "bad operand type for unary {op}: {operand}")
            }
            Self::DivisionByZero => f.write_str("division by zero"),
            Self::IntegerOverflow { operation } => write!(f, "integer overflow in {operation}"),
            Self::ShiftOutOfRange { amount } => {
                write!(f, "shift amount {amount} is outside 0..64")
            }
            Self::StringTooLong { limit } => {
                write!(f, "string result exceeds {limit} bytes")
            }
            Self::UndefinedVariable { name } => write!(f, "undefined variable '{name}'"),
            Self::NotAnInstance { type_name } => {
                write!(f, "only instances have properties, not {type_name}")
            }
            Self::UndefinedProperty { name } => write!(f, "undefined property '{name}'"),
            Self::NotCallable { type_name } => write!(f, "{type_name} is not a function"),
            Self::ArityMismatch { expected, got } => {
                write!(f, "expected {expected} arguments but got {got}")
            }
            Self::InvalidArgument {
                function,
                expected,
                got,
            } => write!(f, "{function}() expects {expected}, got {got}"),
            Self::StackOverflow { depth } => {
                write!(f, "maximum call depth exceeded (limit: {depth})")
            }
            Self::ReturnOutsideFunction => f.write_str("'return' outside of a function"),
            Self::BreakOutsideLoop => f.write_str("'break' outside of a loop"),
        }
    }
}

/// A runtime error, with the span of the expression that raised it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub span: Option<Span>,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        EvalError { kind, span: None }
    }

    /// Attach a span unless a more precise one is already set.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        if self.span.is_none() {
            self.span = Some(span);
        }
        self
    }

    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category(), self.kind)
    }
}

impl std::error::Error for EvalError {}

// Factory functions

#[cold]
pub fn binary_type_mismatch(op: &'static str, left: &Value, right: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::BinaryTypeMismatch {
        op,
        left: left.type_name(),
        right: right.type_name(),
    })
}

#[cold]
pub fn invalid_unary_operand(op: &'static str, operand: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidUnaryOperand {
        op,
        operand: operand.type_name(),
    })
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn integer_overflow(operation: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow { operation })
}

#[cold]
pub fn shift_out_of_range(amount: i64) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ShiftOutOfRange { amount })
}

#[cold]
pub fn string_too_long(limit: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::StringTooLong { limit })
}

#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}

#[cold]
pub fn not_an_instance(value: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotAnInstance {
        type_name: value.type_name(),
    })
}

#[cold]
pub fn undefined_property(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedProperty {
        name: name.to_string(),
    })
}

#[cold]
pub fn not_callable(value: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotCallable {
        type_name: value.type_name(),
    })
}

#[cold]
pub fn arity_mismatch(expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch { expected, got })
}

#[cold]
pub fn invalid_argument(function: &'static str, expected: &'static str, got: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidArgument {
        function,
        expected,
        got: got.type_name(),
    })
}

#[cold]
pub fn stack_overflow(depth: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::StackOverflow { depth })
}

#[cold]
pub fn return_outside_function() -> EvalError {
    EvalError::from_kind(EvalErrorKind::ReturnOutsideFunction)
}

#[cold]
pub fn break_outside_loop() -> EvalError {
    EvalError::from_kind(EvalErrorKind::BreakOutsideLoop)
}

//! Tree-walking evaluator for plox.
//!
//! # Architecture
//!
//! - [`Value`]: runtime values; functions carry their closure frame
//! - [`Environment`]: current-frame cursor over a parent-linked scope chain
//! - [`evaluate_binary`] / [`evaluate_unary`]: operator dispatch with operand checks
//! - [`Interpreter`]: executes statements and evaluates expressions from an arena
//! - [`EvalError`]: runtime failures, grouped by [`ErrorCategory`]

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

mod builtins;
mod environment;
pub mod errors;
mod interpreter;
mod operators;
mod print_handler;
mod unary_operators;
mod value;

pub use environment::{AssignError, Environment, LocalScope, Scope};
pub use errors::{ControlFlow, ErrorCategory, EvalError, EvalErrorKind, EvalResult, ExecResult};
pub use interpreter::{Interpreter, InterpreterBuilder, ScopedInterpreter, MAX_CALL_DEPTH};
pub use operators::{evaluate_binary, values_equal, MAX_STRING_BYTES};
pub use print_handler::{
    buffer_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl, SharedPrintHandler,
    StdoutPrintHandler,
};
pub use unary_operators::evaluate_unary;
pub use value::{
    ClassValue, FunctionValue, Heap, InstanceValue, NativeFn, NativeFunction, Value,
};

#[cfg(test)]
mod tests;

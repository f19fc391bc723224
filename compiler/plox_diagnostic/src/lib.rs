//! Diagnostics for the plox interpreter.
//!
//! Each phase keeps its own error type; the driver converts them into a
//! [`Diagnostic`] and hands it to a [`DiagnosticEmitter`].

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;

//! Runtime error rendering.

use plox_diagnostic::Diagnostic;
use plox_eval::{EvalError, EvalErrorKind};

fn label_for_kind(kind: &EvalErrorKind) -> String {
    match kind {
        EvalErrorKind::BinaryTypeMismatch { left, right, .. } => {
            format!("operands are {left} and {right}")
        }
        EvalErrorKind::InvalidUnaryOperand { operand, .. } => format!("operand is {operand}"),
        EvalErrorKind::DivisionByZero => "divisor is zero".to_string(),
        EvalErrorKind::IntegerOverflow { operation } => format!("{operation} overflowed"),
        EvalErrorKind::ShiftOutOfRange { .. } => "shift amount must be in 0..64".to_string(),
        EvalErrorKind::UndefinedVariable { .. } => "not found in any enclosing scope".to_string(),
        EvalErrorKind::NotAnInstance { type_name } => format!("this is {type_name}"),
        EvalErrorKind::UndefinedProperty { .. } => "no such field".to_string(),
        EvalErrorKind::NotCallable { type_name } => format!("{type_name} called here"),
        EvalErrorKind::ArityMismatch { .. } => "called here".to_string(),
        EvalErrorKind::InvalidArgument { function, .. } => format!("in call to {function}()"),
        EvalErrorKind::StringTooLong { .. } => "result would be too large".to_string(),
        EvalErrorKind::StackOverflow { .. } => "recursion too deep".to_string(),
        EvalErrorKind::ReturnOutsideFunction => "not inside a function".to_string(),
        EvalErrorKind::BreakOutsideLoop => "not inside a loop".to_string(),
    }
}

/// Convert an `EvalError` into a `Diagnostic`.
///
/// The category (`TypeError`, `NameError`, ...) is kept as a note.
#[cold]
pub fn render_eval_error(err: &EvalError) -> Diagnostic {
    let mut diag = Diagnostic::error(err.code()).with_message(err.message());
    if let Some(span) = err.span {
        diag = diag.with_label(span, label_for_kind(&err.kind));
    }
    diag.with_note(err.category().as_str())
}

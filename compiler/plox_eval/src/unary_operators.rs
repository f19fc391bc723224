//! Unary operator implementations for the evaluator.

use plox_ir::UnaryOp;

use crate::errors::{integer_overflow, invalid_unary_operand};
use crate::{EvalResult, Value};

/// Evaluate `op operand`.
///
/// `-` negates ints (checked) and floats, keeping the numeric kind. `~` is
/// the bitwise complement of an int. `!` complements booleans and also
/// accepts numbers, treating zero as false.
pub fn evaluate_unary(operand: &Value, op: UnaryOp) -> EvalResult {
    match (op, operand) {
        (UnaryOp::Neg, Value::Int(n)) => n
            .checked_neg()
            .map(Value::Int)
            .ok_or_else(|| integer_overflow("negation")),
        (UnaryOp::Neg, Value::Float(f)) => Ok(Value::Float(-f)),
        (UnaryOp::BitNot, Value::Int(n)) => Ok(Value::Int(!n)),
        (UnaryOp::Not, Value::Bool(b)) => Ok(Value::Bool(!b)),
        (UnaryOp::Not, Value::Int(n)) => Ok(Value::Bool(*n == 0)),
        (UnaryOp::Not, Value::Float(f)) => Ok(Value::Bool(*f == 0.0)),
        _ => Err(invalid_unary_operand(op.as_symbol(), operand)),
    }
}

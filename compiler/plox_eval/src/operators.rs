//! Binary operator implementations for the evaluator.
//!
//! Operand kinds are checked before anything is computed; a pair the
//! operator does not support is an "unsupported operand type(s)" error.
//! Integer arithmetic is checked, `/` always yields a float, and int/float
//! pairs widen to float.

use plox_ir::BinaryOp;

use crate::errors::{
    binary_type_mismatch, division_by_zero, integer_overflow, shift_out_of_range,
    string_too_long,
};
use crate::{EvalError, EvalResult, Value};

/// Largest string, in bytes, that `+` or `*` may build.
pub const MAX_STRING_BYTES: usize = 1 << 30;

#[inline]
fn checked_arith(result: Option<i64>, op_name: &'static str) -> EvalResult {
    result.map(Value::Int).ok_or_else(|| integer_overflow(op_name))
}

/// Evaluate `left op right`.
pub fn evaluate_binary(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Eq => return values_equal(left, right, op).map(Value::Bool),
        BinaryOp::NotEq => return values_equal(left, right, op).map(|eq| Value::Bool(!eq)),
        _ => {}
    }

    let mismatch = || binary_type_mismatch(op.as_symbol(), left, right);
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => eval_int_binary(*a, *b, op),
        (Value::Int(_) | Value::Float(_), Value::Int(_) | Value::Float(_)) => {
            let (Some(a), Some(b)) = (left.as_number(), right.as_number()) else {
                return Err(mismatch());
            };
            eval_float_binary(a, b, op).ok_or_else(mismatch)?
        }
        (Value::Str(a), Value::Str(b)) if op == BinaryOp::Add => {
            let len = a.len() + b.len();
            if len > MAX_STRING_BYTES {
                return Err(string_too_long(MAX_STRING_BYTES));
            }
            let mut joined = String::with_capacity(len);
            joined.push_str(a);
            joined.push_str(b);
            Ok(Value::string(joined))
        }
        (Value::Str(s), Value::Int(n)) if op == BinaryOp::Mul => {
            let count = usize::try_from(*n).unwrap_or(0);
            match s.len().checked_mul(count) {
                Some(len) if len <= MAX_STRING_BYTES => Ok(Value::string(s.repeat(count))),
                _ => Err(string_too_long(MAX_STRING_BYTES)),
            }
        }
        _ => Err(mismatch()),
    }
}

#[expect(
    clippy::cast_precision_loss,
    reason = "division always produces a float"
)]
fn eval_int_binary(a: i64, b: i64, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => checked_arith(a.checked_add(b), "addition"),
        BinaryOp::Sub => checked_arith(a.checked_sub(b), "subtraction"),
        BinaryOp::Mul => checked_arith(a.checked_mul(b), "multiplication"),
        BinaryOp::Div => {
            if b == 0 {
                return Err(division_by_zero());
            }
            Ok(Value::Float(a as f64 / b as f64))
        }
        BinaryOp::Lt => Ok(Value::Bool(a < b)),
        BinaryOp::LtEq => Ok(Value::Bool(a <= b)),
        BinaryOp::Gt => Ok(Value::Bool(a > b)),
        BinaryOp::GtEq => Ok(Value::Bool(a >= b)),
        BinaryOp::BitAnd => Ok(Value::Int(a & b)),
        BinaryOp::BitOr => Ok(Value::Int(a | b)),
        BinaryOp::BitXor => Ok(Value::Int(a ^ b)),
        BinaryOp::Shl => shift_amount(b).map(|s| Value::Int(a << s)),
        BinaryOp::Shr => shift_amount(b).map(|s| Value::Int(a >> s)),
        BinaryOp::Eq => Ok(Value::Bool(a == b)),
        BinaryOp::NotEq => Ok(Value::Bool(a != b)),
    }
}

/// Shift amounts must lie in `0..64`.
fn shift_amount(amount: i64) -> Result<u32, EvalError> {
    u32::try_from(amount)
        .ok()
        .filter(|s| *s < i64::BITS)
        .ok_or_else(|| shift_out_of_range(amount))
}

/// `None` means floats do not support `op` (the bitwise family).
fn eval_float_binary(a: f64, b: f64, op: BinaryOp) -> Option<EvalResult> {
    let value = match op {
        BinaryOp::Add => Value::Float(a + b),
        BinaryOp::Sub => Value::Float(a - b),
        BinaryOp::Mul => Value::Float(a * b),
        BinaryOp::Div => {
            if b == 0.0 {
                return Some(Err(division_by_zero()));
            }
            Value::Float(a / b)
        }
        BinaryOp::Lt => Value::Bool(a < b),
        BinaryOp::LtEq => Value::Bool(a <= b),
        BinaryOp::Gt => Value::Bool(a > b),
        BinaryOp::GtEq => Value::Bool(a >= b),
        BinaryOp::Eq => Value::Bool(a == b),
        BinaryOp::NotEq => Value::Bool(a != b),
        BinaryOp::BitAnd | BinaryOp::BitOr | BinaryOp::BitXor | BinaryOp::Shl | BinaryOp::Shr => {
            return None;
        }
    };
    Some(Ok(value))
}

/// Language-level `==`.
///
/// Same-kind operands compare by value (objects by identity), an int/float
/// pair compares numerically, and `nil == nil`. Any other pairing is a
/// type error reported against `op`.
pub fn values_equal(left: &Value, right: &Value, op: BinaryOp) -> Result<bool, EvalError> {
    let equal = match (left, right) {
        (Value::Int(_), Value::Float(_)) | (Value::Float(_), Value::Int(_)) => {
            left.as_number() == right.as_number()
        }
        (Value::Function(_) | Value::Native(_), Value::Function(_) | Value::Native(_))
        | (Value::Nil, Value::Nil)
        | (Value::Bool(_), Value::Bool(_))
        | (Value::Int(_), Value::Int(_))
        | (Value::Float(_), Value::Float(_))
        | (Value::Str(_), Value::Str(_))
        | (Value::Class(_), Value::Class(_))
        | (Value::Instance(_), Value::Instance(_)) => left == right,
        _ => return Err(binary_type_mismatch(op.as_symbol(), left, right)),
    };
    Ok(equal)
}

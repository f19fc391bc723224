use plox_ir::UnaryOp;
use pretty_assertions::assert_eq;

use crate::{evaluate_unary, EvalErrorKind, Value};

#[test]
fn negation_keeps_numeric_kind() {
    assert_eq!(evaluate_unary(&Value::int(5), UnaryOp::Neg), Ok(Value::int(-5)));
    assert_eq!(evaluate_unary(&Value::float(2.5), UnaryOp::Neg), Ok(Value::float(-2.5)));
}

#[test]
fn negation_overflow() {
    assert_eq!(
        evaluate_unary(&Value::int(i64::MIN), UnaryOp::Neg).unwrap_err().kind,
        EvalErrorKind::IntegerOverflow {
            operation: "negation"
        }
    );
}

#[test]
fn bitwise_not_requires_int() {
    assert_eq!(evaluate_unary(&Value::int(0), UnaryOp::BitNot), Ok(Value::int(-1)));
    assert_eq!(
        evaluate_unary(&Value::float(1.0), UnaryOp::BitNot).unwrap_err().kind,
        EvalErrorKind::InvalidUnaryOperand {
            op: "~",
            operand: "float"
        }
    );
}

#[test]
fn logical_not_on_booleans_and_numbers() {
    assert_eq!(evaluate_unary(&Value::Bool(true), UnaryOp::Not), Ok(Value::Bool(false)));
    assert_eq!(evaluate_unary(&Value::int(0), UnaryOp::Not), Ok(Value::Bool(true)));
    assert_eq!(evaluate_unary(&Value::int(3), UnaryOp::Not), Ok(Value::Bool(false)));
    assert_eq!(evaluate_unary(&Value::float(0.0), UnaryOp::Not), Ok(Value::Bool(true)));
}

#[test]
fn logical_not_rejects_other_kinds() {
    assert!(evaluate_unary(&Value::Nil, UnaryOp::Not).is_err());
    assert!(evaluate_unary(&Value::string("x"), UnaryOp::Not).is_err());
    assert!(evaluate_unary(&Value::string("x"), UnaryOp::Neg).is_err());
}

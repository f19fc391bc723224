//! Expression evaluation.

use plox_ir::{ExprId, ExprKind, Literal, LogicalOp, Name};
use plox_stack::ensure_sufficient_stack;

use super::Interpreter;
use crate::errors::{not_an_instance, undefined_property, undefined_variable};
use crate::{evaluate_binary, evaluate_unary, AssignError, EvalError, EvalResult, Value};

impl Interpreter {
    /// Evaluate one expression from the current arena.
    ///
    /// Errors raised without a location get this expression's span.
    pub fn eval(&mut self, id: ExprId) -> EvalResult {
        ensure_sufficient_stack(|| {
            let expr = self.arena.get_expr(id);
            let (kind, span) = (expr.kind.clone(), expr.span);
            self.eval_kind(kind).map_err(|e| e.with_span(span))
        })
    }

    fn eval_kind(&mut self, kind: ExprKind) -> EvalResult {
        match kind {
            ExprKind::Literal(literal) => Ok(self.eval_literal(literal)),
            ExprKind::Grouping(inner) => self.eval(inner),
            ExprKind::Unary { op, operand } => {
                let value = self.eval(operand)?;
                evaluate_unary(&value, op)
            }
            ExprKind::Binary { left, op, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                evaluate_binary(&left, &right, op)
            }
            ExprKind::Logical { left, op, right } => {
                let left = self.eval(left)?;
                let short_circuit = match op {
                    LogicalOp::Or => left.is_truthy(),
                    LogicalOp::And => !left.is_truthy(),
                };
                if short_circuit {
                    Ok(left)
                } else {
                    self.eval(right)
                }
            }
            ExprKind::Variable(name) => self
                .env
                .lookup(name)
                .ok_or_else(|| self.undefined(name)),
            ExprKind::Assign { name, value } => {
                let value = self.eval(value)?;
                match self.env.assign(name, value.clone()) {
                    Ok(()) => Ok(value),
                    Err(AssignError::Undefined) => Err(self.undefined(name)),
                }
            }
            ExprKind::Call { callee, args } => {
                let callee = self.eval(callee)?;
                let arena = self.arena.clone();
                let args = arena
                    .get_expr_list(args)
                    .iter()
                    .map(|&arg| self.eval(arg))
                    .collect::<Result<Vec<_>, _>>()?;
                self.eval_call(&callee, args)
            }
            ExprKind::Lambda { params, body } => Ok(self.make_function(None, params, body)),
            ExprKind::Get { object, name } => {
                let object = self.eval(object)?;
                let Value::Instance(instance) = &object else {
                    return Err(not_an_instance(&object));
                };
                instance
                    .get(name)
                    .ok_or_else(|| undefined_property(self.interner.lookup(name)))
            }
            ExprKind::Set {
                object,
                name,
                value,
            } => {
                let object = self.eval(object)?;
                let Value::Instance(instance) = &object else {
                    return Err(not_an_instance(&object));
                };
                let value = self.eval(value)?;
                instance.set(name, value.clone());
                Ok(value)
            }
        }
    }

    fn eval_literal(&self, literal: Literal) -> Value {
        match literal {
            Literal::Nil => Value::Nil,
            Literal::Bool(b) => Value::Bool(b),
            Literal::Int(n) => Value::Int(n),
            Literal::Float(f) => Value::Float(f),
            Literal::Str(s) => Value::string(self.interner.lookup(s)),
        }
    }

    #[cold]
    fn undefined(&self, name: Name) -> EvalError {
        undefined_variable(self.interner.lookup(name))
    }
}

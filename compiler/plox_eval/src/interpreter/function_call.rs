//! Function call evaluation methods for the Interpreter.

use super::{Interpreter, MAX_CALL_DEPTH};
use crate::errors::{arity_mismatch, break_outside_loop, not_callable, stack_overflow};
use crate::{ControlFlow, EvalResult, FunctionValue, LocalScope, Scope, Value};

impl Interpreter {
    /// Call `callee` with already-evaluated arguments.
    ///
    /// Arity is checked before any frame is created.
    #[tracing::instrument(level = "debug", skip_all, fields(callee = %callee, args = args.len()))]
    pub(crate) fn eval_call(&mut self, callee: &Value, args: Vec<Value>) -> EvalResult {
        let Some(arity) = callee.arity() else {
            return Err(not_callable(callee));
        };
        if arity != args.len() {
            return Err(arity_mismatch(arity, args.len()));
        }

        match callee {
            Value::Function(function) => self.call_function(function, args),
            Value::Native(native) => native.call(&args),
            Value::Class(class) => Ok(Value::instance(class)),
            _ => Err(not_callable(callee)),
        }
    }

    /// Run a user function body in a fresh frame parented on its closure.
    fn call_function(&mut self, function: &FunctionValue, args: Vec<Value>) -> EvalResult {
        if self.call_depth >= MAX_CALL_DEPTH {
            return Err(stack_overflow(MAX_CALL_DEPTH));
        }

        let mut frame = Scope::with_parent(function.closure.clone());
        for (&param, arg) in function.params.iter().zip(args) {
            frame.define(param, arg);
        }

        self.call_depth += 1;
        let arena = function.arena.clone();
        let flow = self.with_call_frame(LocalScope::new(frame), arena.clone(), |scoped| {
            scoped.execute_sequence(arena.get_stmt_list(function.body))
        });
        self.call_depth -= 1;

        match flow? {
            ControlFlow::Normal => Ok(Value::Nil),
            ControlFlow::Return(value) => Ok(value),
            ControlFlow::Break => Err(break_outside_loop()),
        }
    }
}

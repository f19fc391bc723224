//! Statement execution.

use plox_ir::{Name, ParamRange, StmtId, StmtKind, StmtRange};
use plox_stack::ensure_sufficient_stack;

use super::Interpreter;
use crate::{ControlFlow, ExecResult, FunctionValue, Value};

impl Interpreter {
    /// Execute one statement from the current arena.
    pub fn execute(&mut self, id: StmtId) -> ExecResult {
        ensure_sufficient_stack(|| self.execute_inner(id))
    }

    fn execute_inner(&mut self, id: StmtId) -> ExecResult {
        let kind = self.arena.get_stmt(id).kind.clone();
        match kind {
            StmtKind::Expression(expr) => {
                self.eval(expr)?;
            }
            StmtKind::Print(expr) => {
                let value = self.eval(expr)?;
                self.print_handler.println(&value.to_string());
            }
            StmtKind::Var { name, init } => {
                let value = match init {
                    Some(expr) => self.eval(expr)?,
                    None => Value::Nil,
                };
                self.env.define(name, value);
            }
            StmtKind::Block(body) => return self.execute_block(body),
            StmtKind::If {
                condition,
                then_branch,
                else_branch,
            } => {
                if self.eval(condition)?.is_truthy() {
                    return self.execute(then_branch);
                }
                if let Some(else_branch) = else_branch {
                    return self.execute(else_branch);
                }
            }
            StmtKind::While { condition, body } => {
                while self.eval(condition)?.is_truthy() {
                    match self.execute(body)? {
                        ControlFlow::Normal => {}
                        ControlFlow::Break => break,
                        ret @ ControlFlow::Return(_) => return Ok(ret),
                    }
                }
            }
            StmtKind::Function { name, params, body } => {
                let function = self.make_function(Some(name), params, body);
                self.env.define(name, function);
            }
            StmtKind::Return(value) => {
                let value = match value {
                    Some(expr) => self.eval(expr)?,
                    None => Value::Nil,
                };
                return Ok(ControlFlow::Return(value));
            }
            StmtKind::Break(value) => {
                if let Some(expr) = value {
                    self.eval(expr)?;
                }
                return Ok(ControlFlow::Break);
            }
            StmtKind::Class { name } => {
                let class = Value::class(self.interner.lookup(name));
                self.env.define(name, class);
            }
        }
        Ok(ControlFlow::Normal)
    }

    /// Execute `body` in a new child frame of the current one.
    pub(crate) fn execute_block(&mut self, body: StmtRange) -> ExecResult {
        let arena = self.arena.clone();
        self.with_env_scope(|scoped| scoped.execute_sequence(arena.get_stmt_list(body)))
    }

    /// Execute statements in the current frame, stopping at the first
    /// `return` or `break`.
    pub(crate) fn execute_sequence(&mut self, stmts: &[StmtId]) -> ExecResult {
        for &stmt in stmts {
            match self.execute(stmt)? {
                ControlFlow::Normal => {}
                exit => return Ok(exit),
            }
        }
        Ok(ControlFlow::Normal)
    }

    /// Build a function value closing over the current frame.
    pub(crate) fn make_function(
        &self,
        name: Option<Name>,
        params: ParamRange,
        body: StmtRange,
    ) -> Value {
        Value::function(FunctionValue {
            name: name.map(|n| self.interner.lookup(n)),
            params: self.arena.get_params(params).to_vec(),
            body,
            arena: self.arena.clone(),
            closure: self.env.current_scope(),
        })
    }
}

//! The tree-walking interpreter.
//!
//! Statements are executed by [`Interpreter::execute`] (see `exec.rs`) and
//! expressions evaluated by [`Interpreter::eval`] (see `eval.rs`). Both walk
//! the arena the current code was parsed into; a call switches to the
//! callee's arena for the duration of the call.
//!
//! State is one environment cursor (the current frame) whose chain always
//! ends in the global frame holding the built-ins.

mod builder;
mod eval;
mod exec;
mod function_call;
mod scope_guard;

pub use builder::InterpreterBuilder;
pub use scope_guard::ScopedInterpreter;

use plox_ir::{ExprArena, Module, SharedArena, SharedInterner};

use crate::errors::{break_outside_loop, return_outside_function};
use crate::{ControlFlow, Environment, EvalError, SharedPrintHandler};

/// Calls nested deeper than this fail with a stack-overflow error.
pub const MAX_CALL_DEPTH: usize = 10_000;

pub struct Interpreter {
    interner: SharedInterner,
    /// Arena holding the statements currently being executed.
    arena: SharedArena,
    pub(crate) env: Environment,
    print_handler: SharedPrintHandler,
    call_depth: usize,
}

impl Interpreter {
    /// An interpreter with built-ins registered and output on stdout.
    pub fn new(interner: SharedInterner) -> Self {
        InterpreterBuilder::new(interner).build()
    }

    /// Execute a parsed module's top-level statements in order.
    ///
    /// Bindings persist in the interpreter afterwards, so successive calls
    /// behave like successive REPL lines. `return` or `break` reaching the top
    /// level is an error.
    pub fn run(&mut self, module: &Module, arena: SharedArena) -> Result<(), EvalError> {
        tracing::debug!(statements = module.statements.len(), "running module");
        self.arena = arena;
        for &id in &module.statements {
            let span = self.arena.get_stmt(id).span;
            match self.execute(id)? {
                ControlFlow::Normal => {}
                ControlFlow::Return(_) => return Err(return_outside_function().with_span(span)),
                ControlFlow::Break => return Err(break_outside_loop().with_span(span)),
            }
        }
        Ok(())
    }

    /// Render the environment chain from the current frame outwards.
    pub fn dump_env(&self) -> String {
        self.env.dump(&self.interner)
    }

    pub fn interner(&self) -> &SharedInterner {
        &self.interner
    }

    /// Output captured by a buffer print handler.
    pub fn get_print_output(&self) -> String {
        self.print_handler.get_output()
    }
}

fn empty_arena() -> SharedArena {
    SharedArena::new(ExprArena::new())
}

#[cfg(test)]
mod tests;

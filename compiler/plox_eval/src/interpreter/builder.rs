//! `InterpreterBuilder` for creating configured interpreters.

use plox_ir::SharedInterner;

use super::{empty_arena, Interpreter};
use crate::{builtins, stdout_handler, Environment, SharedPrintHandler, Value};

/// Builder for [`Interpreter`].
///
/// ```text
/// let interp = InterpreterBuilder::new(interner.clone())
///     .print_handler(buffer_handler())
///     .build();
/// ```
pub struct InterpreterBuilder {
    interner: SharedInterner,
    print_handler: Option<SharedPrintHandler>,
    globals: Vec<(&'static str, Value)>,
}

impl InterpreterBuilder {
    pub fn new(interner: SharedInterner) -> Self {
        InterpreterBuilder {
            interner,
            print_handler: None,
            globals: Vec::new(),
        }
    }

    /// Where `print` writes. Defaults to stdout.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Bind an extra value in the global frame, alongside the built-ins.
    #[must_use]
    pub fn global(mut self, name: &'static str, value: Value) -> Self {
        self.globals.push((name, value));
        self
    }

    pub fn build(self) -> Interpreter {
        let mut env = Environment::new();
        builtins::register(&mut env, &self.interner);
        for (name, value) in self.globals {
            env.define_global(self.interner.intern(name), value);
        }

        Interpreter {
            interner: self.interner,
            arena: empty_arena(),
            env,
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            call_depth: 0,
        }
    }
}

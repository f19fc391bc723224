//! Lexer, parser and interpreter wired together.

use plox_eval::{
    buffer_handler, stdout_handler, Interpreter, InterpreterBuilder, SharedPrintHandler,
};
use plox_ir::{SharedArena, SharedInterner};

use crate::RunError;

/// One interpreter plus the interner its names live in.
///
/// The file runner uses a session for a single script; the REPL keeps one
/// for its whole lifetime.
pub struct Session {
    interpreter: Interpreter,
}

impl Session {
    /// A session printing to stdout.
    pub fn new() -> Self {
        Self::with_print_handler(stdout_handler())
    }

    pub fn with_print_handler(handler: SharedPrintHandler) -> Self {
        let interpreter = InterpreterBuilder::new(SharedInterner::new())
            .print_handler(handler)
            .build();
        Session { interpreter }
    }

    /// Lex, parse and execute `source` against this session's state.
    ///
    /// Stops at the first error of any phase. Statements that ran before a
    /// runtime error keep their effects.
    pub fn run_source(&mut self, source: &str) -> Result<(), RunError> {
        let tokens = plox_lexer::lex(source)?;
        let output = plox_parse::parse(&tokens, self.interpreter.interner())?;
        tracing::debug!(
            statements = output.module.statements.len(),
            exprs = output.arena.expr_count(),
            stmts = output.arena.stmt_count(),
            "parsed source"
        );
        let arena = SharedArena::new(output.arena);
        self.interpreter.run(&output.module, arena)?;
        Ok(())
    }

    /// The environment chain, one frame per line.
    pub fn dump_env(&self) -> String {
        self.interpreter.dump_env()
    }

    /// Everything printed so far, when built with a buffer handler.
    pub fn output(&self) -> String {
        self.interpreter.get_print_output()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Run `source` in a fresh session and return what it printed.
pub fn run_source(source: &str) -> Result<String, RunError> {
    let mut session = Session::with_print_handler(buffer_handler());
    session.run_source(source)?;
    Ok(session.output())
}

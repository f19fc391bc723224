//! RAII guards that restore the interpreter's environment cursor.
//!
//! A [`ScopedInterpreter`] derefs to the interpreter and puts the previous
//! current frame (and, for calls, the previous arena) back when dropped, so
//! every exit path out of a block or call restores the caller's state,
//! including `?` propagation and unwinding.

use std::ops::{Deref, DerefMut};

use plox_ir::SharedArena;

use super::Interpreter;
use crate::{LocalScope, Scope};

pub struct ScopedInterpreter<'guard> {
    interpreter: &'guard mut Interpreter,
    saved_scope: Option<LocalScope<Scope>>,
    saved_arena: Option<SharedArena>,
}

impl Drop for ScopedInterpreter<'_> {
    fn drop(&mut self) {
        if let Some(scope) = self.saved_scope.take() {
            self.interpreter.env.restore(scope);
        }
        if let Some(arena) = self.saved_arena.take() {
            self.interpreter.arena = arena;
        }
    }
}

impl Deref for ScopedInterpreter<'_> {
    type Target = Interpreter;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for ScopedInterpreter<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl Interpreter {
    /// Enter a fresh child of the current frame until the guard drops.
    pub fn scoped(&mut self) -> ScopedInterpreter<'_> {
        let saved = self.env.push_scope();
        ScopedInterpreter {
            interpreter: self,
            saved_scope: Some(saved),
            saved_arena: None,
        }
    }

    /// Make `frame` current and execute from `arena` until the guard drops.
    pub fn scoped_call(&mut self, frame: LocalScope<Scope>, arena: SharedArena) -> ScopedInterpreter<'_> {
        let saved_scope = self.env.enter(frame);
        let saved_arena = std::mem::replace(&mut self.arena, arena);
        ScopedInterpreter {
            interpreter: self,
            saved_scope: Some(saved_scope),
            saved_arena: Some(saved_arena),
        }
    }

    /// Run `f` inside a new block scope.
    pub fn with_env_scope<T, F>(&mut self, f: F) -> T
    where
        F: FnOnce(&mut ScopedInterpreter<'_>) -> T,
    {
        let mut scoped = self.scoped();
        f(&mut scoped)
    }

    /// Run `f` with `frame` current and `arena` active.
    pub fn with_call_frame<T, F>(&mut self, frame: LocalScope<Scope>, arena: SharedArena, f: F) -> T
    where
        F: FnOnce(&mut ScopedInterpreter<'_>) -> T,
    {
        let mut scoped = self.scoped_call(frame, arena);
        f(&mut scoped)
    }
}

//! Callable and object values: user functions, natives, classes, instances.

use std::cell::RefCell;
use std::fmt;

use plox_ir::{Name, SharedArena, StmtRange};
use rustc_hash::FxHashMap;

use super::{Heap, Value};
use crate::environment::{LocalScope, Scope};
use crate::EvalResult;

/// A user-defined function together with the frame it closed over.
///
/// The body lives in `arena`; holding the arena keeps function values valid
/// after the source that declared them has finished running (REPL lines).
pub struct FunctionValue {
    /// `None` for anonymous `fun (..) { .. }` expressions.
    pub name: Option<&'static str>,
    pub params: Vec<Name>,
    pub body: StmtRange,
    pub arena: SharedArena,
    /// Shared, never copied: every call sees writes made by earlier calls.
    pub closure: LocalScope<Scope>,
}

impl FunctionValue {
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

impl fmt::Debug for FunctionValue {
    // The closure frame usually contains this function, so it is not printed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue")
            .field("name", &self.name)
            .field("params", &self.params)
            .field("body", &self.body)
            .finish_non_exhaustive()
    }
}

/// Signature of a native built-in.
pub type NativeFn = fn(&[Value]) -> EvalResult;

/// A built-in function implemented in Rust.
pub struct NativeFunction {
    pub name: &'static str,
    pub arity: usize,
    pub func: NativeFn,
}

impl NativeFunction {
    pub fn call(&self, args: &[Value]) -> EvalResult {
        (self.func)(args)
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeFunction")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

/// A class. Classes carry no methods; calling one makes an empty instance.
#[derive(Debug)]
pub struct ClassValue {
    pub name: &'static str,
}

/// An instance of a class with a growable field map.
#[derive(Debug)]
pub struct InstanceValue {
    pub class: Heap<ClassValue>,
    fields: RefCell<FxHashMap<Name, Value>>,
}

impl InstanceValue {
    pub(super) fn new(class: Heap<ClassValue>) -> Self {
        InstanceValue {
            class,
            fields: RefCell::new(FxHashMap::default()),
        }
    }

    pub fn get(&self, name: Name) -> Option<Value> {
        self.fields.borrow().get(&name).cloned()
    }

    /// Inserts or overwrites a field.
    pub fn set(&self, name: Name, value: Value) {
        self.fields.borrow_mut().insert(name, value);
    }
}

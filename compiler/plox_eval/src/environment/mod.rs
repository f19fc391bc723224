//! Lexical scope chain for the interpreter.
//!
//! Frames are reference-counted and linked to their parent. The environment
//! only tracks which frame is *current*: a block makes a child of the current
//! frame, while a call makes a child of the callee's closure frame. Closures
//! hold the frame itself, so writes through one handle are seen by all.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt::{self, Write as _};
use std::ops::Deref;
use std::rc::Rc;

use plox_ir::{Name, StringInterner};

use crate::Value;

/// Error returned by `Scope::assign`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssignError {
    /// No frame on the chain binds the name.
    Undefined,
}

/// A single-threaded shared frame handle.
///
/// Wraps `Rc<RefCell<T>>` so every frame allocation goes through
/// [`LocalScope::new`].
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    #[inline]
    pub fn borrow(&self) -> std::cell::Ref<'_, T> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> std::cell::RefMut<'_, T> {
        self.0.borrow_mut()
    }

    /// Do both handles refer to the same frame?
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T> fmt::Debug for LocalScope<T> {
    // Frames can reach themselves through closures; print the address only.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LocalScope")
            .field(&Rc::as_ptr(&self.0))
            .finish()
    }
}

impl<T: Default> Default for LocalScope<T> {
    fn default() -> Self {
        LocalScope::new(T::default())
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// One frame: its bindings and an optional parent.
#[derive(Clone, Debug, Default)]
pub struct Scope {
    bindings: FxHashMap<Name, Value>,
    parent: Option<LocalScope<Scope>>,
}

impl Scope {
    pub fn new() -> Self {
        Scope::default()
    }

    pub fn with_parent(parent: LocalScope<Scope>) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        }
    }

    pub fn parent(&self) -> Option<&LocalScope<Scope>> {
        self.parent.as_ref()
    }

    /// Insert or overwrite a binding in this frame only.
    #[inline]
    pub fn define(&mut self, name: Name, value: Value) {
        self.bindings.insert(name, value);
    }

    /// Walk this frame and its ancestors for `name`.
    #[inline]
    pub fn lookup(&self, name: Name) -> Option<Value> {
        if let Some(value) = self.bindings.get(&name) {
            return Some(value.clone());
        }
        if let Some(parent) = &self.parent {
            return parent.borrow().lookup(name);
        }
        None
    }

    /// Overwrite the nearest existing binding of `name`.
    #[inline]
    pub fn assign(&mut self, name: Name, value: Value) -> Result<(), AssignError> {
        if let Some(slot) = self.bindings.get_mut(&name) {
            *slot = value;
            return Ok(());
        }
        if let Some(parent) = &self.parent {
            return parent.borrow_mut().assign(name, value);
        }
        Err(AssignError::Undefined)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bindings of this frame as `name = value`, sorted by name.
    fn render(&self, interner: &StringInterner) -> String {
        let mut entries: Vec<(&str, &Value)> = self
            .bindings
            .iter()
            .map(|(name, value)| (interner.lookup(*name), value))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));

        let mut out = String::new();
        for (i, (name, value)) in entries.into_iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            let _ = write!(out, "{name} = {value}");
        }
        out
    }
}

/// The interpreter's current-frame cursor plus the fixed global frame.
pub struct Environment {
    current: LocalScope<Scope>,
    global: LocalScope<Scope>,
}

impl Environment {
    /// A fresh top-level frame whose parent is an empty global frame.
    pub fn new() -> Self {
        let global = LocalScope::new(Scope::new());
        Environment {
            current: LocalScope::new(Scope::with_parent(global.clone())),
            global,
        }
    }

    /// Handle to the current frame, as captured by closures.
    #[inline]
    pub fn current_scope(&self) -> LocalScope<Scope> {
        self.current.clone()
    }

    /// Make `scope` current, returning the frame it replaces.
    #[inline]
    pub fn enter(&mut self, scope: LocalScope<Scope>) -> LocalScope<Scope> {
        std::mem::replace(&mut self.current, scope)
    }

    /// Put back a frame returned by [`Environment::enter`].
    #[inline]
    pub fn restore(&mut self, previous: LocalScope<Scope>) {
        self.current = previous;
    }

    /// Enter a new child of the current frame, returning the old current frame.
    #[inline]
    pub fn push_scope(&mut self) -> LocalScope<Scope> {
        let child = LocalScope::new(Scope::with_parent(self.current.clone()));
        self.enter(child)
    }

    #[inline]
    pub fn define(&mut self, name: Name, value: Value) {
        self.current.borrow_mut().define(name, value);
    }

    #[inline]
    pub fn lookup(&self, name: Name) -> Option<Value> {
        self.current.borrow().lookup(name)
    }

    #[inline]
    pub fn assign(&mut self, name: Name, value: Value) -> Result<(), AssignError> {
        self.current.borrow_mut().assign(name, value)
    }

    /// Bind a name in the global frame (used for built-ins).
    pub fn define_global(&mut self, name: Name, value: Value) {
        self.global.borrow_mut().define(name, value);
    }

    /// Render every frame from the current one outwards, one per line.
    pub fn dump(&self, interner: &StringInterner) -> String {
        let mut out = String::new();
        let mut frame = Some(self.current.clone());
        let mut index = 0;
        while let Some(scope) = frame {
            let borrowed = scope.borrow();
            let marker = if scope.ptr_eq(&self.global) {
                " (global)"
            } else {
                ""
            };
            let _ = writeln!(out, "frame {index}{marker}: {}", borrowed.render(interner));
            frame = borrowed.parent().cloned();
            index += 1;
        }
        out
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

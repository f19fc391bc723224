//! Runtime values for the plox interpreter.
//!
//! Heap-backed variants wrap a [`Heap`] handle whose constructor is private to
//! this module, so values are always built through the factory methods on
//! [`Value`]:
//!
//! ```text
//! let s = Value::string("hello");
//! let class = Value::class("Point");
//! ```
//!
//! Values are single-threaded (`Rc`) because evaluation is strictly
//! synchronous.

mod composite;
mod heap;

use std::fmt;

pub use composite::{ClassValue, FunctionValue, InstanceValue, NativeFn, NativeFunction};
pub use heap::Heap;

/// A runtime value.
#[derive(Clone, Debug)]
pub enum Value {
    /// Absence of a value (`nil`, uninitialized variables, bare `return`).
    Nil,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(Heap<str>),
    Function(Heap<FunctionValue>),
    Native(Heap<NativeFunction>),
    Class(Heap<ClassValue>),
    Instance(Heap<InstanceValue>),
}

// Factory methods

impl Value {
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    #[inline]
    pub fn float(f: f64) -> Self {
        Value::Float(f)
    }

    #[inline]
    pub fn string(s: impl AsRef<str>) -> Self {
        Value::Str(Heap::from_text(s.as_ref()))
    }

    pub fn function(function: FunctionValue) -> Self {
        Value::Function(Heap::new(function))
    }

    pub fn native(name: &'static str, arity: usize, func: NativeFn) -> Self {
        Value::Native(Heap::new(NativeFunction { name, arity, func }))
    }

    pub fn class(name: &'static str) -> Self {
        Value::Class(Heap::new(ClassValue { name }))
    }

    /// A fresh instance of `class` with no fields.
    pub fn instance(class: &Heap<ClassValue>) -> Self {
        Value::Instance(Heap::new(InstanceValue::new(class.clone())))
    }
}

impl Value {
    /// Only `nil` and `false` are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Nil => false,
            Value::Bool(b) => *b,
            _ => true,
        }
    }

    /// Numeric view: ints widen to float.
    #[expect(
        clippy::cast_precision_loss,
        reason = "int/float mixing widens the int"
    )]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Declared parameter count, or `None` if the value cannot be called.
    pub fn arity(&self) -> Option<usize> {
        match self {
            Value::Function(f) => Some(f.arity()),
            Value::Native(n) => Some(n.arity),
            Value::Class(_) => Some(0),
            _ => None,
        }
    }

    /// Name of the value's kind as used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::Function(_) | Value::Native(_) => "function",
            Value::Class(_) => "class",
            Value::Instance(_) => "instance",
        }
    }
}

/// Structural for data, identity for functions, classes and instances.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => **a == **b,
            (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
            (Value::Native(a), Value::Native(b)) => a.ptr_eq(b),
            (Value::Class(a), Value::Class(b)) => a.ptr_eq(b),
            (Value::Instance(a), Value::Instance(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("nil"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) if x.is_finite() && x.fract() == 0.0 => write!(f, "{x:.1}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Str(s) => f.write_str(s),
            Value::Function(func) => match func.name {
                Some(name) => write!(f, "<fn {name}>"),
                None => f.write_str("<fn>"),
            },
            Value::Native(native) => write!(f, "<native fn {}>", native.name),
            Value::Class(class) => write!(f, "<class {}>", class.name),
            Value::Instance(instance) => write!(f, "<{} instance>", instance.class.name),
        }
    }
}

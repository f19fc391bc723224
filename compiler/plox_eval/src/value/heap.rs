//! Reference-counted storage for heap-allocated values.

use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

/// Shared pointer to a heap value.
///
/// Only `Value` factory methods construct these, so every allocation in the
/// evaluator goes through one place.
#[repr(transparent)]
pub struct Heap<T: ?Sized>(Rc<T>);

impl<T> Heap<T> {
    #[inline]
    pub(super) fn new(value: T) -> Self {
        Heap(Rc::new(value))
    }
}

impl Heap<str> {
    #[inline]
    pub(super) fn from_text(s: &str) -> Self {
        Heap(Rc::from(s))
    }
}

impl<T: ?Sized> Heap<T> {
    /// Identity comparison: do both handles point at the same allocation?
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T: ?Sized> Clone for Heap<T> {
    #[inline]
    fn clone(&self) -> Self {
        Heap(Rc::clone(&self.0))
    }
}

impl<T: ?Sized> Deref for Heap<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).fmt(f)
    }
}

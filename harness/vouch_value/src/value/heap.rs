//! Shared storage for composite values.

use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

/// Reference-counted storage behind every composite [`Value`](super::Value).
///
/// The constructor is private to the `value` module: composites are built
/// through `Value::list`, `Value::map`, `Value::record` and friends. A clone
/// of a `Heap` points at the same allocation, which is what strict identity
/// (`to_be`) observes.
pub struct Heap<T: ?Sized>(Rc<T>);

impl<T: ?Sized> Heap<T> {
    pub(super) fn shared(inner: Rc<T>) -> Self {
        Heap(inner)
    }

    /// Whether both handles point at the same allocation.
    #[inline]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Rc::ptr_eq(&this.0, &other.0)
    }
}

impl<T> Heap<T> {
    pub(super) fn new(value: T) -> Self {
        Heap(Rc::new(value))
    }
}

impl<T: ?Sized> Clone for Heap<T> {
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
        self.0.fmt(f)
    }
}

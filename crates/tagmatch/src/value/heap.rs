//! Shared, immutable heap payloads for [`Value`](super::Value).

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// Reference-counted payload of a composite value.
///
/// The constructor is private to the value module, so every composite value
/// is built through a `Value::` factory method. Cloning a value shares the
/// payload instead of copying it, which keeps the bindings produced by a
/// match cheap.
#[derive(Clone, PartialEq)]
pub struct Heap<T>(Arc<T>);

impl<T> Heap<T> {
    #[inline]
    pub(super) fn new(value: T) -> Self {
        Heap(Arc::new(value))
    }

    /// Whether two handles share one allocation.
    #[inline]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.0, &other.0)
    }
}

impl<T> Deref for Heap<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (*self.0).fmt(f)
    }
}

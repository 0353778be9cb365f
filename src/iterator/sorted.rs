//! Iterator tagged as already sorted.

use super::{BlockingPull, CancellationSignal, Enumerable, Pull, Slice};
use crate::optional::Optional;

/// A bounded sequence produced by [`sort`](crate::functional::sort).
///
/// It pulls exactly like a [`Slice`]. The tag lets a later sort on the same
/// chain hand the value back unchanged instead of sorting again.
#[derive(Debug, Clone)]
pub struct Sorted<T> {
    inner: Slice<T>,
}

impl<T> Sorted<T> {
    /// Tags `values` as sorted without checking the order.
    pub(crate) fn from_sorted(values: Vec<T>) -> Self {
        Self {
            inner: Slice::new(values),
        }
    }

    /// Returns the elements not yet pulled.
    pub fn as_slice(&self) -> &[T] {
        self.inner.as_slice()
    }

    /// Returns the elements not yet pulled as a vector.
    pub fn into_vec(self) -> Vec<T> {
        self.inner.into_vec()
    }
}

impl<T> Default for Sorted<T> {
    fn default() -> Self {
        Self::from_sorted(Vec::new())
    }
}

impl<T> Pull<T> for Sorted<T> {
    fn next(&mut self) -> Optional<T> {
        self.inner.next()
    }

    fn as_enumerable(&self) -> Option<&dyn Enumerable<T>> {
        Some(self)
    }

    fn as_blocking(&mut self) -> Option<&mut dyn BlockingPull<T>> {
        Some(self)
    }

    fn take_sorted(&mut self) -> Option<Self> {
        Some(std::mem::take(self))
    }
}

impl<T> Enumerable<T> for Sorted<T> {
    fn count(&self) -> usize {
        self.inner.count()
    }
}

impl<T> BlockingPull<T> for Sorted<T> {
    fn wait_for_next(&mut self, signal: &CancellationSignal) -> Optional<T> {
        self.inner.wait_for_next(signal)
    }
}

//! Bounded-sequence iterator.

use std::fmt;

use super::{BlockingPull, CancellationSignal, Enumerable, Pull};
use crate::optional::Optional;

/// An iterator over a fixed, owned sequence.
///
/// The slice keeps its elements and a cursor; [`Pull::next`] moves the cursor
/// forward and [`Enumerable::count`] reports how many elements are left. Once
/// exhausted it stays exhausted.
///
/// Pulling requires `&mut self`, so a slice is never pulled from two places
/// at once without external synchronization.
///
/// # Examples
///
/// ```rust
/// use pullwise::iterator::{Enumerable, Pull, Slice};
/// use pullwise::optional::Optional;
///
/// let mut source: Slice<i32> = [1, 2].into_iter().collect();
/// assert_eq!(source.count(), 2);
/// assert_eq!(source.next(), Optional::some(1));
/// assert_eq!(source.next(), Optional::some(2));
/// assert_eq!(source.next(), Optional::none());
/// assert_eq!(source.next(), Optional::none());
/// ```
pub struct Slice<T> {
    remaining: std::vec::IntoIter<T>,
    length: usize,
}

impl<T> Slice<T> {
    /// Creates a slice iterator over `values`.
    pub fn new(values: Vec<T>) -> Self {
        let length = values.len();
        Self {
            remaining: values.into_iter(),
            length,
        }
    }

    /// Returns the elements not yet pulled.
    pub fn as_slice(&self) -> &[T] {
        self.remaining.as_slice()
    }

    /// Returns the cursor position, i.e. how many elements were pulled.
    pub fn position(&self) -> usize {
        self.length - self.remaining.len()
    }

    /// Returns the elements not yet pulled as a vector.
    pub fn into_vec(self) -> Vec<T> {
        self.remaining.collect()
    }
}

impl<T> Default for Slice<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> From<Vec<T>> for Slice<T> {
    fn from(values: Vec<T>) -> Self {
        Self::new(values)
    }
}

impl<T> FromIterator<T> for Slice<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T: Clone> Clone for Slice<T> {
    fn clone(&self) -> Self {
        Self {
            remaining: self.remaining.clone(),
            length: self.length,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Slice<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Slice")
            .field("remaining", &self.as_slice())
            .field("position", &self.position())
            .finish()
    }
}

impl<T> Pull<T> for Slice<T> {
    fn next(&mut self) -> Optional<T> {
        self.remaining.next().into()
    }

    fn as_enumerable(&self) -> Option<&dyn Enumerable<T>> {
        Some(self)
    }

    fn as_blocking(&mut self) -> Option<&mut dyn BlockingPull<T>> {
        Some(self)
    }
}

impl<T> Enumerable<T> for Slice<T> {
    fn count(&self) -> usize {
        self.remaining.len()
    }
}

// Never blocks; implemented so generic waits skip the background thread.
impl<T> BlockingPull<T> for Slice<T> {
    fn wait_for_next(&mut self, signal: &CancellationSignal) -> Optional<T> {
        if signal.is_cancelled() {
            return Optional::None;
        }
        self.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn count_tracks_cursor() {
        let mut source = Slice::from(vec![4, 9, 13]);
        let _ = source.next();

        assert_eq!(source.count(), 2);
        assert_eq!(source.position(), 1);
        assert_eq!(source.as_slice(), &[9, 13]);
    }

    #[rstest]
    fn does_not_require_clone() {
        struct Token(u8);

        let mut source = Slice::from(vec![Token(1), Token(2)]);
        assert_eq!(source.next().map(|token| token.0), Optional::some(1));
        assert_eq!(source.into_vec().len(), 1);
    }

    #[rstest]
    fn cancelled_wait_keeps_element() {
        let mut source = Slice::from(vec![1]);
        let signal = CancellationSignal::pre_cancelled();

        assert_eq!(source.wait_for_next(&signal), Optional::none());
        assert_eq!(source.count(), 1);
    }
}

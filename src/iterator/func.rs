//! Function-backed iterator.

use std::fmt;

use super::Pull;
use crate::optional::Optional;

/// An iterator that calls a function for every element.
///
/// Each call to [`Pull::next`] invokes the wrapped function once. What
/// happens after the function first returns an absent value is entirely up
/// to the function. An `FnPull` without a function, see
/// [`FnPull::empty`], is always exhausted.
///
/// # Examples
///
/// ```rust
/// use pullwise::iterator::{FnPull, Pull};
/// use pullwise::optional::Optional;
///
/// let mut counter = 0;
/// let mut source = FnPull::new(move || {
///     counter += 1;
///     if counter <= 2 { Optional::some(counter) } else { Optional::none() }
/// });
///
/// assert_eq!(source.next(), Optional::some(1));
/// assert_eq!(source.next(), Optional::some(2));
/// assert_eq!(source.next(), Optional::none());
/// ```
#[derive(Clone, Copy)]
pub struct FnPull<F> {
    function: Option<F>,
}

impl<F> FnPull<F> {
    /// Wraps `function` as an iterator.
    pub const fn new(function: F) -> Self {
        Self {
            function: Some(function),
        }
    }
}

impl<T> FnPull<fn() -> Optional<T>> {
    /// Creates an iterator without a function; it never yields anything.
    pub const fn empty() -> Self {
        Self { function: None }
    }
}

impl<F> From<Option<F>> for FnPull<F> {
    fn from(function: Option<F>) -> Self {
        Self { function }
    }
}

impl<F> fmt::Debug for FnPull<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("FnPull")
            .field("empty", &self.function.is_none())
            .finish()
    }
}

impl<T, F> Pull<T> for FnPull<F>
where
    F: FnMut() -> Optional<T>,
{
    fn next(&mut self) -> Optional<T> {
        self.function.as_mut().map_or(Optional::None, |function| function())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn empty_never_yields() {
        let mut source = FnPull::<fn() -> Optional<i32>>::empty();
        assert!(source.next().is_none());
        assert!(source.next().is_none());
    }

    #[rstest]
    fn exhaustion_is_not_sticky() {
        let mut calls = 0;
        let mut source = FnPull::new(move || {
            calls += 1;
            if calls == 1 { Optional::none() } else { Optional::some(calls) }
        });

        assert!(source.next().is_none());
        assert_eq!(source.next(), Optional::some(2));
    }
}

//! Higher-order functions over pull iterators.
//!
//! Every combinator here is written against [`Pull`] alone and drives the
//! source through [`for_each`]. Capabilities are probed, never required:
//! [`collect`] pre-sizes its output with [`size_hint`], [`equal`] compares
//! exact counts when both sides have them, and [`sort`] recognizes its own
//! output.
//!
//! # Evaluation
//!
//! [`map`] and [`filter`] return iterators, but they are not lazy: the source
//! is drained when they are called and the results are buffered in a
//! [`Slice`].
//!
//! ```rust
//! use pullwise::functional::map;
//! use pullwise::iterator::{Enumerable, Slice};
//!
//! let mut source = Slice::from(vec![1, 2, 3]);
//! let doubled = map(&mut source, |value| value * 2);
//!
//! assert_eq!(source.count(), 0);
//! assert_eq!(doubled.as_slice(), &[2, 4, 6]);
//! ```
//!
//! # Missing sources
//!
//! `None::<P>` is a valid source that yields nothing, so every combinator
//! degrades to "no elements" instead of failing:
//!
//! ```rust
//! use pullwise::functional::{all, collect};
//! use pullwise::iterator::Slice;
//!
//! assert!(collect(None::<Slice<i32>>).is_empty());
//! assert!(all(None::<Slice<i32>>, |_| false));
//! ```

mod channel;
mod sort;

pub use channel::{collect_to_channel, collect_to_channel_until};
pub use sort::{sort, sort_by};

use crate::iterator::{Pull, Slice, exact_count, size_hint};

/// Early-termination handle passed to the [`for_each`] callback.
///
/// Calling [`stop`](Break::stop) ends the loop before the next pull.
#[derive(Debug, Default)]
pub struct Break {
    stopped: bool,
}

impl Break {
    /// Requests that iteration stop after the current element.
    pub const fn stop(&mut self) {
        self.stopped = true;
    }

    /// Returns `true` once [`stop`](Break::stop) has been called.
    pub const fn is_stopped(&self) -> bool {
        self.stopped
    }
}

/// Pulls every element of `source` into `function` until the source is
/// exhausted or the callback stops the loop.
///
/// # Examples
///
/// ```rust
/// use pullwise::functional::for_each;
/// use pullwise::iterator::Slice;
///
/// let mut seen = Vec::new();
/// for_each(Slice::from(vec![1, 2, 3, 4]), |value, control| {
///     seen.push(value);
///     if value == 2 {
///         control.stop();
///     }
/// });
/// assert_eq!(seen, vec![1, 2]);
/// ```
pub fn for_each<T, P, F>(mut source: P, mut function: F)
where
    P: Pull<T>,
    F: FnMut(T, &mut Break),
{
    let mut control = Break::default();
    while !control.is_stopped() {
        match source.next().into_option() {
            Some(value) => function(value, &mut control),
            None => control.stop(),
        }
    }
}

/// Returns `true` if `predicate` holds for every element.
///
/// Vacuously `true` for an empty source; stops at the first failing element.
pub fn all<T, P, F>(source: P, mut predicate: F) -> bool
where
    P: Pull<T>,
    F: FnMut(&T) -> bool,
{
    !any(source, |value| !predicate(value))
}

/// Returns `true` if `predicate` holds for some element.
///
/// Vacuously `false` for an empty source; stops at the first matching
/// element.
pub fn any<T, P, F>(source: P, mut predicate: F) -> bool
where
    P: Pull<T>,
    F: FnMut(&T) -> bool,
{
    let mut found = false;
    for_each(source, |value, control| {
        if predicate(&value) {
            found = true;
            control.stop();
        }
    });
    found
}

/// Drains `source` into a vector, preserving order.
pub fn collect<T, P>(source: P) -> Vec<T>
where
    P: Pull<T>,
{
    let mut values = Vec::with_capacity(size_hint(&source));
    for_each(source, |value, _| values.push(value));
    values
}

/// Returns `true` if both sources yield equal elements in the same order.
///
/// When both sides report an exact count, differing counts answer `false`
/// without pulling anything. Otherwise both sides are collected and
/// compared.
///
/// # Examples
///
/// ```rust
/// use pullwise::functional::equal;
/// use pullwise::iterator::Slice;
///
/// assert!(equal(Slice::from(vec![2, 1]), Slice::from(vec![2, 1])));
/// assert!(!equal(Slice::from(vec![1, 2]), Slice::from(vec![2, 1])));
/// ```
pub fn equal<T, A, B>(mut left: A, mut right: B) -> bool
where
    T: PartialEq,
    A: Pull<T>,
    B: Pull<T>,
{
    if let (Some(left_count), Some(right_count)) = (exact_count(&left), exact_count(&right)) {
        if left_count != right_count {
            return false;
        }
    }

    collect(&mut left) == collect(&mut right)
}

/// Keeps the elements for which `predicate` holds.
///
/// The source is drained immediately; the returned [`Slice`] holds the kept
/// elements in their original order.
pub fn filter<T, P, F>(source: P, mut predicate: F) -> Slice<T>
where
    P: Pull<T>,
    F: FnMut(&T) -> bool,
{
    let mut kept = Vec::with_capacity(size_hint(&source));
    for_each(source, |value, _| {
        if predicate(&value) {
            kept.push(value);
        }
    });
    Slice::new(kept)
}

/// Transforms every element with `function`.
///
/// The source is drained immediately; the returned [`Slice`] holds the
/// results in source order.
pub fn map<T, U, P, F>(source: P, mut function: F) -> Slice<U>
where
    P: Pull<T>,
    F: FnMut(T) -> U,
{
    let mut mapped = Vec::with_capacity(size_hint(&source));
    for_each(source, |value, _| mapped.push(function(value)));
    Slice::new(mapped)
}

/// Left-folds `source` with `function`, starting from `U::default()`.
///
/// The first argument of `function` is the accumulator, the second the
/// element just pulled.
///
/// # Examples
///
/// ```rust
/// use pullwise::functional::reduce;
/// use pullwise::iterator::Slice;
///
/// let total: f64 = reduce(Slice::from(vec![1, 2, 3]), |sum, value| sum + f64::from(value));
/// assert!((total - 6.0).abs() < f64::EPSILON);
/// ```
pub fn reduce<T, U, P, F>(source: P, mut function: F) -> U
where
    P: Pull<T>,
    U: Default,
    F: FnMut(U, T) -> U,
{
    let mut accumulator = U::default();
    for_each(source, |value, _| {
        accumulator = function(std::mem::take(&mut accumulator), value);
    });
    accumulator
}

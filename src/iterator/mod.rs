//! Pull-based iterators.
//!
//! The [`Pull`] trait is the base protocol: each call to [`Pull::next`]
//! returns the next element as a present [`Optional`], or an absent one once
//! the source is exhausted. Two optional capabilities layer on top of it:
//!
//! - [`Enumerable`]: the source knows how many elements remain
//! - [`BlockingPull`]: the source can wait for the next element while
//!   honoring a [`CancellationSignal`]
//!
//! Callers probe for these at runtime through [`Pull::as_enumerable`] and
//! [`Pull::as_blocking`], falling back to [`DEFAULT_SIZE_HINT`] and the
//! background-thread adapter in [`wait_for_next`] when they are missing.
//!
//! # Variants
//!
//! - [`Slice`]: owns a fixed sequence and a cursor
//! - [`Queue`]: receives from a first-in-first-out channel
//! - [`FnPull`]: calls a function producing one optional element per call
//! - [`Sorted`]: a [`Slice`] tagged as the result of
//!   [`sort`](crate::functional::sort)
//!
//! `&mut P`, `Box<P>` and `Option<P>` forward the protocol; `None` stands for
//! a missing iterator and yields nothing.
//!
//! # Examples
//!
//! ```rust
//! use pullwise::iterator::{Pull, Slice, size_hint};
//! use pullwise::optional::Optional;
//!
//! let mut source = Slice::from(vec![4, 9, 13]);
//! assert_eq!(size_hint(&source), 3);
//! assert_eq!(source.next(), Optional::some(4));
//! assert_eq!(size_hint(&source), 2);
//! ```

mod cancel;
mod func;
mod queue;
mod slice;
mod sorted;
mod wait;

pub use cancel::CancellationSignal;
pub use func::FnPull;
pub use queue::{Queue, channel, send};
pub use slice::Slice;
pub use sorted::Sorted;
pub use wait::{Waitable, wait_for_next};

use crate::optional::Optional;

/// Size hint assumed for sources that do not report how many elements remain.
pub const DEFAULT_SIZE_HINT: usize = 16;

/// A pull-based iterator over elements of type `T`.
///
/// Once [`next`](Pull::next) returns an absent value the source is considered
/// exhausted. Whether later calls keep returning absent values is up to each
/// variant: [`Slice`] and [`Queue`] do, [`FnPull`] defers to its function.
///
/// The remaining methods are capability probes. Their defaults report that
/// the capability is missing; implementors override the ones they support.
pub trait Pull<T> {
    /// Retrieves the next element, or an absent value when exhausted.
    fn next(&mut self) -> Optional<T>;

    /// Returns the size-hinting view of this source, if it has one.
    fn as_enumerable(&self) -> Option<&dyn Enumerable<T>> {
        None
    }

    /// Returns the cancellable-wait view of this source, if it has one.
    fn as_blocking(&mut self) -> Option<&mut dyn BlockingPull<T>> {
        None
    }

    /// Moves out the contents of a source already produced by
    /// [`sort`](crate::functional::sort), leaving an exhausted source behind.
    ///
    /// Only [`Sorted`] answers with `Some`.
    fn take_sorted(&mut self) -> Option<Sorted<T>> {
        None
    }
}

/// A source that knows how many elements remain.
pub trait Enumerable<T>: Pull<T> {
    /// Returns the number of elements left to pull.
    fn count(&self) -> usize;
}

/// A source whose next element can be awaited with cancellation.
pub trait BlockingPull<T>: Pull<T> {
    /// Waits until an element is available, the source is exhausted, or
    /// `signal` fires. The latter two return an absent value.
    ///
    /// A signal that has already fired returns an absent value without
    /// consuming an element.
    fn wait_for_next(&mut self, signal: &CancellationSignal) -> Optional<T>;
}

/// Returns the remaining element count reported by `source`, or `None` if it
/// cannot tell.
pub fn exact_count<T, P>(source: &P) -> Option<usize>
where
    P: Pull<T> + ?Sized,
{
    source.as_enumerable().map(|enumerable| enumerable.count())
}

/// Returns a positive size hint for `source`.
///
/// This is the reported count when it is positive, and
/// [`DEFAULT_SIZE_HINT`] otherwise.
pub fn size_hint<T, P>(source: &P) -> usize
where
    P: Pull<T> + ?Sized,
{
    exact_count(source)
        .filter(|count| *count > 0)
        .unwrap_or(DEFAULT_SIZE_HINT)
}

/// Adapts a pull source into a standard [`Iterator`] that ends at the first
/// absent value.
///
/// # Examples
///
/// ```rust
/// use pullwise::iterator::{Slice, into_std};
///
/// let doubled: Vec<i32> = into_std(Slice::from(vec![1, 2, 3])).map(|x| x * 2).collect();
/// assert_eq!(doubled, vec![2, 4, 6]);
/// ```
pub fn into_std<T, P>(mut source: P) -> impl Iterator<Item = T>
where
    P: Pull<T>,
{
    std::iter::from_fn(move || source.next().into_option())
}

impl<T, P> Pull<T> for &mut P
where
    P: Pull<T> + ?Sized,
{
    fn next(&mut self) -> Optional<T> {
        (**self).next()
    }

    fn as_enumerable(&self) -> Option<&dyn Enumerable<T>> {
        (**self).as_enumerable()
    }

    fn as_blocking(&mut self) -> Option<&mut dyn BlockingPull<T>> {
        (**self).as_blocking()
    }

    fn take_sorted(&mut self) -> Option<Sorted<T>> {
        (**self).take_sorted()
    }
}

impl<T, P> Pull<T> for Box<P>
where
    P: Pull<T> + ?Sized,
{
    fn next(&mut self) -> Optional<T> {
        (**self).next()
    }

    fn as_enumerable(&self) -> Option<&dyn Enumerable<T>> {
        (**self).as_enumerable()
    }

    fn as_blocking(&mut self) -> Option<&mut dyn BlockingPull<T>> {
        (**self).as_blocking()
    }

    fn take_sorted(&mut self) -> Option<Sorted<T>> {
        (**self).take_sorted()
    }
}

impl<T, P> Enumerable<T> for &mut P
where
    P: Enumerable<T> + ?Sized,
{
    fn count(&self) -> usize {
        (**self).count()
    }
}

impl<T, P> Enumerable<T> for Box<P>
where
    P: Enumerable<T> + ?Sized,
{
    fn count(&self) -> usize {
        (**self).count()
    }
}

impl<T, P> Pull<T> for Option<P>
where
    P: Pull<T>,
{
    fn next(&mut self) -> Optional<T> {
        self.as_mut().map_or(Optional::None, |source| source.next())
    }

    fn as_enumerable(&self) -> Option<&dyn Enumerable<T>> {
        self.as_ref().and_then(|source| source.as_enumerable())
    }

    fn as_blocking(&mut self) -> Option<&mut dyn BlockingPull<T>> {
        self.as_mut().and_then(|source| source.as_blocking())
    }

    fn take_sorted(&mut self) -> Option<Sorted<T>> {
        self.as_mut().and_then(|source| source.take_sorted())
    }
}

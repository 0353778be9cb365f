//! Sorting pull iterators.

use std::cmp::Ordering;

use super::collect;
use crate::iterator::{Pull, Sorted};

/// Sorts the elements of `source` in ascending order.
///
/// See [`sort_by`] for the short-circuit and stability rules.
///
/// # Examples
///
/// ```rust
/// use pullwise::functional::sort;
/// use pullwise::iterator::Slice;
///
/// let sorted = sort(Slice::from(vec![9, 102, 41, 14, 0]), false);
/// assert_eq!(sorted.as_slice(), &[0, 9, 14, 41, 102]);
///
/// // Sorting a sort result hands it back as is.
/// let address = sorted.as_slice().as_ptr();
/// let again = sort(sorted, true);
/// assert_eq!(again.as_slice().as_ptr(), address);
/// ```
pub fn sort<T, P>(source: P, stable: bool) -> Sorted<T>
where
    T: Ord,
    P: Pull<T>,
{
    sort_by(source, stable, |left, right| left < right)
}

/// Sorts the elements of `source` with the strict ordering `less`.
///
/// `less(a, b)` must return `true` exactly when `a` goes before `b`.
///
/// A source that is itself a [`Sorted`] (the output of an earlier sort) is
/// returned unchanged. Its elements are moved, not shared: sorting
/// `&mut sorted` hands them back and leaves `sorted` exhausted. Anything else is collected; if the elements are
/// already in order nothing moves, otherwise they are sorted stably or
/// unstably as requested.
pub fn sort_by<T, P, F>(mut source: P, stable: bool, mut less: F) -> Sorted<T>
where
    P: Pull<T>,
    F: FnMut(&T, &T) -> bool,
{
    if let Some(sorted) = source.take_sorted() {
        return sorted;
    }

    let mut values = collect(source);
    if !values.is_sorted_by(|left, right| !less(right, left)) {
        let compare = |left: &T, right: &T| {
            if less(left, right) {
                Ordering::Less
            } else if less(right, left) {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        };
        if stable {
            values.sort_by(compare);
        } else {
            values.sort_unstable_by(compare);
        }
    }

    Sorted::from_sorted(values)
}

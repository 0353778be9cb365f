//! Eager combinators over in-memory sequences.
//!
//! These are the slice counterparts of [`map`](crate::functional::map),
//! [`filter`](crate::functional::filter) and
//! [`reduce`](crate::functional::reduce). They borrow their input and always
//! return an owned result; an empty input gives an empty (never missing)
//! output.
//!
//! # Examples
//!
//! ```rust
//! use pullwise::sequence;
//!
//! let total: i32 = sequence::reduce(&[0, 1, 2, 3, 4, 5], |sum, value| sum + value);
//! assert_eq!(total, 15);
//!
//! let names = sequence::map(&[("John", "Doe"), ("Jane", "Doe")], |(first, last)| {
//!     format!("{first} {last}")
//! });
//! assert_eq!(names.join(", "), "John Doe, Jane Doe");
//! ```

/// Applies `mapper` to every element, preserving order.
pub fn map<T, U, F>(values: &[T], mapper: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    values.iter().map(mapper).collect()
}

/// Returns clones of the elements for which `keep` holds, preserving order.
///
/// # Examples
///
/// ```rust
/// use pullwise::sequence;
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Person {
///     age: u32,
/// }
///
/// let people = [Person { age: 14 }, Person { age: 61 }, Person { age: 22 }];
/// let adults = sequence::filter(&people, |person| person.age > 18);
/// assert_eq!(adults, vec![Person { age: 61 }, Person { age: 22 }]);
/// ```
pub fn filter<T, F>(values: &[T], mut keep: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    values.iter().filter(|value| keep(value)).cloned().collect()
}

/// Left-folds `values` with `reducer`, starting from `U::default()`.
pub fn reduce<T, U, F>(values: &[T], reducer: F) -> U
where
    U: Default,
    F: FnMut(U, &T) -> U,
{
    values.iter().fold(U::default(), reducer)
}

//! Function composition helpers.
//!
//! - [`identity`]: returns its argument unchanged
//! - [`compose`]: combines two functions right-to-left
//! - [`chain`]: combines any number of same-typed functions right-to-left

/// Returns the value unchanged.
///
/// This is the unit of composition: `compose(identity, f)` and
/// `compose(f, identity)` both behave like `f`, and an empty [`chain`] is
/// `identity`.
///
/// # Examples
///
/// ```
/// use pullwise::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// ```
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}

/// Returns a function computing `outer(inner(x))`.
///
/// # Examples
///
/// ```
/// use pullwise::compose::compose;
///
/// let string_to_int = |text: &str| text.parse::<i64>().unwrap_or_default();
/// let int_to_box = |value: i64| Box::new(value);
///
/// let parse_boxed = compose(int_to_box, string_to_int);
/// assert_eq!(*parse_boxed("42"), 42);
/// ```
#[inline]
pub fn compose<A, B, C, F, G>(outer: F, inner: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |value| outer(inner(value))
}

/// Composes `functions` right-to-left into a single function.
///
/// The last function listed runs first, so `chain([f, g, h])(x)` is
/// `f(g(h(x)))`. An empty list gives [`identity`].
///
/// Functions of different types can be listed together as function
/// pointers, or boxed as `Box<dyn Fn(T) -> T>`.
///
/// # Examples
///
/// ```
/// use pullwise::compose::chain;
///
/// fn add_one(value: i32) -> i32 { value + 1 }
/// fn square(value: i32) -> i32 { value * value }
/// fn halve(value: i32) -> i32 { value / 2 }
///
/// // add_one(5) = 6, square(6) = 36, halve(36) = 18
/// let pipeline = chain([halve, square, add_one]);
/// assert_eq!(pipeline(5), 18);
/// ```
pub fn chain<T, F, I>(functions: I) -> impl Fn(T) -> T
where
    I: IntoIterator<Item = F>,
    F: Fn(T) -> T,
{
    let functions: Vec<F> = functions.into_iter().collect();
    move |value| {
        functions
            .iter()
            .rev()
            .fold(value, |accumulated, function| function(accumulated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn identity_with_unit() {
        assert_eq!(identity(()), ());
    }

    #[rstest]
    fn empty_chain_is_identity() {
        let nothing: [fn(i32) -> i32; 0] = [];
        assert_eq!(chain(nothing)(7), 7);
    }

    #[rstest]
    fn chain_of_boxed_closures() {
        let offset = 10;
        let functions: Vec<Box<dyn Fn(i32) -> i32>> = vec![
            Box::new(move |value: i32| value + offset),
            Box::new(|value: i32| value * 3),
        ];

        // (2 * 3) + 10
        assert_eq!(chain(functions)(2), 16);
    }

    #[rstest]
    fn compose_order() {
        let subtract_one = |value: i32| value - 1;
        let double = |value: i32| value * 2;

        assert_eq!(compose(subtract_one, double)(5), 9);
        assert_eq!(compose(double, subtract_one)(5), 8);
    }
}

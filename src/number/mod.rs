//! Numeric helpers over pull iterators.
//!
//! These are thin compositions of [`map`] and [`for_each`] for element types
//! implementing [`Number`]. Folds start from [`Number::ZERO`] or
//! [`Number::ONE`]. Element-wise helpers return a [`Slice`], so they
//! drain their source immediately like [`map`] does.
//!
//! # Examples
//!
//! ```rust
//! use pullwise::iterator::Slice;
//! use pullwise::number::{dot_product, sum};
//!
//! assert_eq!(sum(Slice::from(vec![1, 2, 3])), 6);
//! assert_eq!(
//!     dot_product(Slice::from(vec![6, -2, -1]), Slice::from(vec![2, 10, 2])),
//!     -10
//! );
//! ```

use std::ops::{Add, Mul};

use crate::functional::{for_each, map};
use crate::iterator::{Enumerable, Pull, Slice};

/// A primitive numeric type: integers and floats.
///
/// `Default` is expected to be the additive identity, as it is for every
/// primitive number.
pub trait Number: Copy + Default + Add<Output = Self> + Mul<Output = Self> {
    /// The additive identity.
    const ZERO: Self;
    /// The multiplicative identity.
    const ONE: Self;
}

/// A non-complex number that converts to and from `f64`.
pub trait Rational: Number + PartialOrd {
    /// Converts to `f64`, possibly losing precision.
    fn to_f64(self) -> f64;

    /// Converts from `f64`, truncating and saturating as `as` casts do.
    fn from_f64(value: f64) -> Self;
}

macro_rules! impl_number {
    ($zero:literal, $one:literal => $($numeric:ty),+) => {
        $(
            impl Number for $numeric {
                const ZERO: Self = $zero;
                const ONE: Self = $one;
            }

            #[allow(
                clippy::cast_possible_truncation,
                clippy::cast_possible_wrap,
                clippy::cast_precision_loss,
                clippy::cast_sign_loss,
                clippy::cast_lossless
            )]
            impl Rational for $numeric {
                fn to_f64(self) -> f64 {
                    self as f64
                }

                fn from_f64(value: f64) -> Self {
                    value as Self
                }
            }
        )+
    };
}

impl_number!(0, 1 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_number!(0.0, 1.0 => f32, f64);

/// Adds up every element; `ZERO` for an empty source.
pub fn sum<T, P>(source: P) -> T
where
    T: Number,
    P: Pull<T>,
{
    let mut total = T::ZERO;
    for_each(source, |value, _| total = total + value);
    total
}

/// Multiplies every element together; `ONE` for an empty source.
pub fn multiply_scalar<T, P>(source: P) -> T
where
    T: Number,
    P: Pull<T>,
{
    let mut product = T::ONE;
    for_each(source, |value, _| product = product * value);
    product
}

/// Multiplies every element by `factor`.
pub fn multiply_vector<T, P>(source: P, factor: T) -> Slice<T>
where
    T: Number,
    P: Pull<T>,
{
    map(source, |value| value * factor)
}

/// Squares every element.
pub fn square<T, P>(source: P) -> Slice<T>
where
    T: Number,
    P: Pull<T>,
{
    map(source, |value| value * value)
}

/// Raises every element to the third power.
pub fn triple<T, P>(source: P) -> Slice<T>
where
    T: Number,
    P: Pull<T>,
{
    map(source, |value| value * value * value)
}

/// Raises every element to the fourth power.
pub fn quadruple<T, P>(source: P) -> Slice<T>
where
    T: Number,
    P: Pull<T>,
{
    map(source, |value| value * value * value * value)
}

/// Raises every element to `exponent` through `f64::powf`.
///
/// Prefer [`square`], [`triple`] and [`quadruple`] for small integral powers;
/// they stay in `T` and avoid the float round trip.
pub fn to_power<T, P>(source: P, exponent: T) -> Slice<T>
where
    T: Rational,
    P: Pull<T>,
{
    let exponent = exponent.to_f64();
    map(source, |value| T::from_f64(value.to_f64().powf(exponent)))
}

/// Returns the sum of the pairwise products of `left` and `right`.
///
/// # Panics
///
/// Panics if the two sources report different counts.
#[track_caller]
pub fn dot_product<T, A, B>(left: A, mut right: B) -> T
where
    T: Number,
    A: Enumerable<T>,
    B: Enumerable<T>,
{
    assert!(
        left.count() == right.count(),
        "functional: dot product on iterators with different dimensions"
    );

    let mut total = T::ZERO;
    for_each(left, |value, _| total = total + value * right.next().expect());
    total
}

//! The [`Optional`] container.

use std::fmt;

/// A value that is either present or absent.
///
/// The default `Optional` is absent, so a zero-initialized container is ready
/// for use. Unlike [`std::option::Option`], reading the value of an absent
/// `Optional` through [`get`](Optional::get) never fails: it yields
/// `T::default()` instead.
///
/// # Examples
///
/// ```rust
/// use pullwise::optional::Optional;
///
/// let value = Optional::some("hello");
/// assert_eq!(value.expect(), "hello");
///
/// let nothing: Optional<&str> = Optional::default();
/// assert!(nothing.is_none());
/// assert_eq!(nothing.get(), "");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Optional<T> {
    /// No value is present.
    None,
    /// A value is present.
    Some(T),
}

impl<T> Optional<T> {
    /// Creates a present `Optional` holding `value`.
    #[inline]
    pub const fn some(value: T) -> Self {
        Self::Some(value)
    }

    /// Creates an absent `Optional`.
    #[inline]
    pub const fn none() -> Self {
        Self::None
    }

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_none(&self) -> bool {
        !self.is_some()
    }

    /// Returns the value, or `T::default()` when absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pullwise::optional::Optional;
    ///
    /// assert_eq!(Optional::some(3).get(), 3);
    /// assert_eq!(Optional::<u8>::none().get(), 0);
    /// ```
    #[inline]
    pub fn get(self) -> T
    where
        T: Default,
    {
        match self {
            Self::Some(value) => value,
            Self::None => T::default(),
        }
    }

    /// Returns the value.
    ///
    /// # Panics
    ///
    /// Panics if no value is present.
    #[inline]
    #[track_caller]
    pub fn expect(self) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => panic!("optional: expect called on None"),
        }
    }

    /// Borrows the contained value.
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Some(value) => Optional::Some(value),
            Self::None => Optional::None,
        }
    }

    /// Transforms the contained value, keeping absence as is.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Optional::Some(function(value)),
            Self::None => Optional::None,
        }
    }

    /// Converts into a standard [`Option`].
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::None
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::None, Self::Some)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.into_option()
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => write!(formatter, "{value}"),
            Self::None => formatter.write_str("None"),
        }
    }
}

//! The [`Outcome`] container.

use std::fmt;
use std::sync::Arc;

use super::{Optional, OutcomeError, SharedError};

/// An optional value whose absence carries an error.
///
/// An outcome is "ok" exactly when it holds a value, and an ok outcome never
/// carries an error. A default-constructed outcome is erroneous but holds no
/// error object: [`error`](Outcome::error) returns `None` for it and its display
/// falls back to the [`OutcomeError::Missing`] message.
///
/// The error is stored behind an [`Arc`], so outcomes clone cheaply.
///
/// # Examples
///
/// ```rust
/// use pullwise::optional::Outcome;
///
/// let ok = Outcome::ok(42);
/// assert!(ok.is_ok());
/// assert!(ok.error().is_none());
///
/// let failed: Outcome<i32> = Outcome::err(std::fmt::Error);
/// assert!(failed.is_err());
/// assert_eq!(failed.get(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct Outcome<T> {
    value: Optional<T>,
    error: Option<SharedError>,
}

impl<T> Outcome<T> {
    /// Creates an ok outcome holding `value`.
    #[inline]
    pub const fn ok(value: T) -> Self {
        Self {
            value: Optional::Some(value),
            error: None,
        }
    }

    /// Creates an erroneous outcome carrying `error`.
    pub fn err<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::err_shared(Arc::new(error))
    }

    /// Creates an erroneous outcome from an already shared error.
    #[inline]
    pub const fn err_shared(error: SharedError) -> Self {
        Self {
            value: Optional::None,
            error: Some(error),
        }
    }

    /// Returns `true` if the outcome holds a value.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        self.value.is_some()
    }

    /// Returns `true` if the outcome is erroneous.
    #[inline]
    pub const fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Returns the carried error, if any.
    ///
    /// This is `None` for ok outcomes and for default-constructed ones.
    pub fn error(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.error.as_deref()
    }

    /// Returns the value, or `T::default()` when erroneous.
    #[inline]
    pub fn get(self) -> T
    where
        T: Default,
    {
        self.value.get()
    }

    /// Returns the value.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is erroneous.
    #[track_caller]
    pub fn expect(self) -> T {
        match self.value {
            Optional::Some(value) => value,
            Optional::None => panic!("optional: expect called on erroneous outcome"),
        }
    }

    /// Converts into a standard [`Result`].
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::Failed`] with the carried error, or
    /// [`OutcomeError::Missing`] when the outcome is erroneous without one.
    pub fn into_result(self) -> Result<T, OutcomeError> {
        match (self.value, self.error) {
            (Optional::Some(value), _) => Ok(value),
            (Optional::None, Some(error)) => Err(OutcomeError::Failed(error)),
            (Optional::None, None) => Err(OutcomeError::Missing),
        }
    }
}

impl<T> Default for Outcome<T> {
    fn default() -> Self {
        Self {
            value: Optional::None,
            error: None,
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::ok(value),
            Err(error) => Self::err(error),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Outcome<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.value, &self.error) {
            (Optional::Some(value), _) => write!(formatter, "{value}"),
            (Optional::None, Some(error)) => write!(formatter, "{error}"),
            (Optional::None, None) => write!(formatter, "{}", OutcomeError::Missing),
        }
    }
}

//! Error types for [`Outcome`](super::Outcome).

use std::sync::Arc;

use thiserror::Error;

/// An error shared between clones of an [`Outcome`](super::Outcome).
pub type SharedError = Arc<dyn std::error::Error + Send + Sync + 'static>;

/// Error produced when an erroneous [`Outcome`](super::Outcome) is converted
/// into a standard [`Result`].
///
/// # Examples
///
/// ```rust
/// use pullwise::optional::{Outcome, OutcomeError};
///
/// let outcome: Outcome<i32> = Outcome::default();
/// assert!(matches!(outcome.into_result(), Err(OutcomeError::Missing)));
/// ```
#[derive(Debug, Clone, Error)]
pub enum OutcomeError {
    /// The outcome carried an error.
    #[error("{0}")]
    Failed(SharedError),
    /// The outcome was erroneous without carrying an error, which happens for
    /// a default-constructed outcome.
    #[error("erroneous outcome carries no error")]
    Missing,
}

//! Optional value containers.
//!
//! This module provides two small containers used throughout the crate:
//!
//! - [`Optional`]: a value that is either present (`Some`) or absent (`None`)
//! - [`Outcome`]: an optional value whose absence carries an error
//!
//! Both are plain values: they are constructed once, never mutated in place,
//! and cloned freely.
//!
//! # Examples
//!
//! ```rust
//! use pullwise::optional::{Optional, Outcome};
//!
//! let present = Optional::some(42);
//! assert!(present.is_some());
//! assert_eq!(present.to_string(), "42");
//!
//! let absent: Optional<i32> = Optional::none();
//! assert_eq!(absent.get(), 0);
//! assert_eq!(absent.to_string(), "None");
//!
//! let parsed: Outcome<i32> = "7".parse::<i32>().into();
//! assert!(parsed.is_ok());
//! assert_eq!(parsed.expect(), 7);
//! ```

mod error;
mod outcome;
mod value;

pub use error::{OutcomeError, SharedError};
pub use outcome::Outcome;
pub use value::Optional;

//! # pullwise
//!
//! A small functional programming library for Rust built around a pull-based
//! iterator abstraction.
//!
//! ## Overview
//!
//! - **Optional values**: [`Optional`](optional::Optional) and
//!   [`Outcome`](optional::Outcome), present/absent and ok/erroneous containers
//! - **Pull iterators**: the [`Pull`](iterator::Pull) protocol with optional
//!   size-hint and cancellable blocking-wait capabilities, plus bounded,
//!   queue-backed and function-backed variants
//! - **Combinators**: `map`, `filter`, `reduce`, `all`, `any`, `equal`, `sort`
//!   and channel collection over any pull iterator
//! - **Sequence helpers**: eager `map`/`filter`/`reduce` over slices and
//!   function composition with `chain`/`compose`
//! - **Numeric helpers**: `sum`, `dot_product`, `square` and friends
//!
//! ## Feature Flags
//!
//! - `iterator`: Pull iterator protocol and variants
//! - `functional`: Combinators over pull iterators
//! - `sequence`: Eager slice combinators
//! - `compose`: Function composition utilities
//! - `number`: Numeric helpers over pull iterators
//! - `serde`: `Serialize`/`Deserialize` for [`Optional`](optional::Optional)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use pullwise::prelude::*;
//!
//! let evens = filter(Slice::from(vec![1, 2, 3, 4]), |value: &i32| value % 2 == 0);
//! assert_eq!(collect(evens), vec![2, 4]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the optional containers, the iterator protocol and the
/// pull combinators. The slice combinators in [`sequence`] share names with
/// the pull combinators and are left out; import them by path.
///
/// # Usage
///
/// ```rust
/// use pullwise::prelude::*;
/// ```
pub mod prelude {
    pub use crate::optional::*;

    #[cfg(feature = "iterator")]
    pub use crate::iterator::*;

    #[cfg(feature = "functional")]
    pub use crate::functional::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;
}

pub mod optional;

#[cfg(feature = "iterator")]
pub mod iterator;

#[cfg(feature = "functional")]
pub mod functional;

#[cfg(feature = "sequence")]
pub mod sequence;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "number")]
pub mod number;

//! Function composition utilities.
//!
//! # Overview
//!
//! - [`compose`]: `compose(f, g)(x) = f(g(x))`
//! - [`chain`]: right-to-left composition of a list of endofunctions
//! - [`identity`]: the unit of composition
//!
//! # Examples
//!
//! ```
//! use pullwise::compose::{chain, compose, identity};
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! // compose(f, g)(x) = f(g(x))
//! assert_eq!(compose(add_one, double)(5), 11);
//!
//! // chain([f, g])(x) = f(g(x)), and the empty chain is identity
//! assert_eq!(chain([add_one, double])(5), 11);
//! assert_eq!(compose(identity, double)(5), double(5));
//! ```
//!
//! # Laws
//!
//! For any functions `f`, `g` and `h` of matching types:
//!
//! ```text
//! compose(f, compose(g, h)) == compose(compose(f, g), h)   // associativity
//! compose(identity, f) == f == compose(f, identity)        // identity
//! ```

mod utils;

pub use utils::{chain, compose, identity};

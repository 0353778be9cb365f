#![cfg(feature = "compose")]
//! Property-based tests for function composition laws.
//!
//! - **Associativity**: `compose(f, compose(g, h)) == compose(compose(f, g), h)`
//! - **Left Identity**: `compose(identity, f) == f`
//! - **Right Identity**: `compose(f, identity) == f`
//! - **Chain**: `chain([f, g, h]) == compose(f, compose(g, h))`

use pullwise::compose::{chain, compose, identity};
use proptest::prelude::*;

proptest! {
    /// Left Identity Law: compose(identity, f)(x) == f(x)
    #[test]
    fn prop_compose_left_identity(x in any::<i32>()) {
        let function = |n: i32| n.wrapping_mul(2);

        prop_assert_eq!(compose(identity, function)(x), function(x));
    }

    /// Right Identity Law: compose(f, identity)(x) == f(x)
    #[test]
    fn prop_compose_right_identity(x in any::<i32>()) {
        let function = |n: i32| n.wrapping_mul(2);

        prop_assert_eq!(compose(function, identity)(x), function(x));
    }

    /// Associativity Law: compose(f, compose(g, h)) == compose(compose(f, g), h)
    #[test]
    fn prop_compose_associativity(x in any::<i32>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(3);
        let function3 = |n: i32| n.wrapping_sub(7);

        let left = compose(function1, compose(function2, function3));
        let right = compose(compose(function1, function2), function3);

        prop_assert_eq!(left(x), right(x));
    }

    /// Chain Law: chain([f, g, h])(x) == f(g(h(x)))
    #[test]
    fn prop_chain_is_right_to_left(x in any::<i32>()) {
        let function1: fn(i32) -> i32 = |n| n.wrapping_add(1);
        let function2: fn(i32) -> i32 = |n| n.wrapping_mul(3);
        let function3: fn(i32) -> i32 = |n| n.wrapping_sub(7);

        let chained = chain([function1, function2, function3]);

        prop_assert_eq!(chained(x), function1(function2(function3(x))));
    }

    /// Empty Chain Law: chain([]) == identity
    #[test]
    fn prop_empty_chain_is_identity(x in any::<i64>()) {
        let nothing: Vec<fn(i64) -> i64> = Vec::new();

        prop_assert_eq!(chain(nothing)(x), identity(x));
    }
}

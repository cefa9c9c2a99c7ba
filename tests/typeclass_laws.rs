#![cfg(feature = "typeclass")]
//! Property-based tests for the type class laws.
//!
//! - **Functor**: identity and composition
//! - **Monad**: left identity, right identity and associativity
//! - **Bifunctor**: identity and first/second consistency

use duplex::container::{Optional, Outcome, absent, failure, present, success};
use duplex::typeclass::{Applicative, Bifunctor, Functor, Monad};
use proptest::prelude::*;

fn optional_strategy() -> impl Strategy<Value = Optional<i32>> {
    prop_oneof![any::<i32>().prop_map(present::<i32>), Just(absent::<i32>())]
}

fn outcome_strategy() -> impl Strategy<Value = Outcome<i32, String>> {
    prop_oneof![
        any::<i32>().prop_map(success::<i32, String>),
        any::<String>().prop_map(failure::<i32, String>),
    ]
}

fn halve(value: i32) -> Optional<i32> {
    if value % 2 == 0 { present(value / 2) } else { absent() }
}

fn checked_negate(value: i32) -> Optional<i32> {
    value.checked_neg().map_or_else(absent, present)
}

fn bounded(value: i32) -> Outcome<i32, String> {
    if value.unsigned_abs() < 1_000 {
        success(value)
    } else {
        failure(format!("{value} out of range"))
    }
}

fn doubled(value: i32) -> Outcome<i32, String> {
    value
        .checked_mul(2)
        .map_or_else(|| failure("overflow".to_string()), success)
}

proptest! {
    #[test]
    fn prop_optional_functor_identity(value in optional_strategy()) {
        prop_assert_eq!(value.fmap(|x| x), value);
    }

    #[test]
    fn prop_optional_functor_composition(value in optional_strategy()) {
        let f = |x: i32| x.wrapping_add(1);
        let g = |x: i32| x.wrapping_mul(3);
        prop_assert_eq!(value.fmap(f).fmap(g), value.fmap(|x| g(f(x))));
    }

    #[test]
    fn prop_outcome_functor_identity(outcome in outcome_strategy()) {
        prop_assert_eq!(outcome.clone().fmap(|x| x), outcome);
    }

    #[test]
    fn prop_optional_monad_left_identity(value in any::<i32>()) {
        prop_assert_eq!(<Optional<()>>::pure(value).flat_map(halve), halve(value));
    }

    #[test]
    fn prop_optional_monad_right_identity(value in optional_strategy()) {
        prop_assert_eq!(value.flat_map(present), value);
    }

    #[test]
    fn prop_optional_monad_associativity(value in optional_strategy()) {
        let left = value.flat_map(halve).flat_map(checked_negate);
        let right = value.flat_map(|x| halve(x).flat_map(checked_negate));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_outcome_monad_left_identity(value in any::<i32>()) {
        let lifted: Outcome<i32, String> = <Outcome<(), String>>::pure(value);
        prop_assert_eq!(lifted.flat_map(bounded), bounded(value));
    }

    #[test]
    fn prop_outcome_monad_associativity(outcome in outcome_strategy()) {
        let left = outcome.clone().flat_map(bounded).flat_map(doubled);
        let right = outcome.flat_map(|x| bounded(x).flat_map(doubled));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_outcome_bifunctor_identity(outcome in outcome_strategy()) {
        prop_assert_eq!(outcome.clone().bimap(|e| e, |x| x), outcome);
    }

    #[test]
    fn prop_outcome_first_second_consistency(outcome in outcome_strategy()) {
        let f = |e: String| e.len();
        let g = |x: i32| x.wrapping_mul(2);

        let by_bimap = outcome.clone().bimap(f, g);
        let by_first_second = outcome.clone().first(f).second(g);
        let by_second_first = outcome.second(g).first(f);

        prop_assert_eq!(by_bimap, by_first_second);
        prop_assert_eq!(by_first_second, by_second_first);
    }

    #[test]
    fn prop_outcome_second_agrees_with_fmap(outcome in outcome_strategy()) {
        let g = |x: i32| x.wrapping_sub(5);
        prop_assert_eq!(outcome.clone().second(g), outcome.fmap(g));
    }
}

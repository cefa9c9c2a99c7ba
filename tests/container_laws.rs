//! Property-based tests for the container contracts.
//!
//! - Discriminants are exclusive and exhaustive
//! - Extraction returns the payload on the active variant
//! - Combinators on the inactive variant are no-ops
//! - `compare` is reflexive and symmetric, and false across variants
//! - Conversions between the containers round-trip

use duplex::container::{Optional, Outcome, absent, failure, present, success};
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

proptest! {
    #[test]
    fn prop_optional_discriminant_is_exclusive(value in optional_strategy()) {
        prop_assert_ne!(value.some(), value.none());
    }

    #[test]
    fn prop_outcome_discriminant_is_exclusive(outcome in outcome_strategy()) {
        prop_assert_ne!(outcome.ok(), outcome.err());
    }

    #[test]
    fn prop_present_extraction(value in any::<i32>(), default in any::<i32>(), message in ".*") {
        prop_assert!(present(value).some());
        prop_assert!(!present(value).none());
        prop_assert_eq!(present(value).expect(&message), value);
        prop_assert_eq!(present(value).unwrap_or(default), value);
    }

    #[test]
    fn prop_absent_expect_carries_message(message in ".*") {
        let error = absent::<i32>().try_expect(&message).unwrap_err();
        prop_assert_eq!(error.message(), message.as_str());
    }

    #[test]
    fn prop_failure_map_is_noop(error in any::<String>()) {
        let original: Outcome<i32, String> = failure(error);
        let mapped = original.clone().map(|x| x.wrapping_add(1));
        prop_assert!(mapped.compare(&original));
    }

    #[test]
    fn prop_success_map_err_is_noop(value in any::<i32>()) {
        let original: Outcome<i32, String> = success(value);
        let mapped = original.clone().map_err(|e| e + "!");
        prop_assert!(mapped.compare(&original));
    }

    #[test]
    fn prop_inactive_and_then_never_invokes(error in any::<String>()) {
        let mut invoked = false;
        let result = failure::<i32, String>(error.clone()).and_then(|x| {
            invoked = true;
            success(x)
        });
        prop_assert!(!invoked);
        prop_assert_eq!(result, failure(error));
    }

    #[test]
    fn prop_present_round_trip(value in any::<i32>(), error in any::<String>()) {
        let back = present(value).to_outcome(error).to_optional();
        prop_assert!(back.compare(&present(value)));
    }

    #[test]
    fn prop_absent_to_outcome_is_failure(error in any::<String>()) {
        let outcome = absent::<i32>().to_outcome(error.clone());
        prop_assert!(outcome.compare(&failure(error)));
    }

    #[test]
    fn prop_outcome_to_optional(outcome in outcome_strategy()) {
        let optional = outcome.clone().to_optional();
        match outcome {
            Outcome::Success(value) => {
                prop_assert!(optional.compare(&present(value)));
            }
            Outcome::Failure(_) => {
                prop_assert!(optional.none());
            }
        }
    }

    #[test]
    fn prop_optional_compare_reflexive_symmetric(
        left in optional_strategy(),
        right in optional_strategy(),
    ) {
        prop_assert!(left.compare(&left));
        prop_assert_eq!(left.compare(&right), right.compare(&left));
        prop_assert_eq!(left.compare(&right), left == right);
    }

    #[test]
    fn prop_outcome_compare_reflexive_symmetric(
        left in outcome_strategy(),
        right in outcome_strategy(),
    ) {
        prop_assert!(left.compare(&left));
        prop_assert_eq!(left.compare(&right), right.compare(&left));
    }

    #[test]
    fn prop_cross_variant_compare_is_false(value in any::<i32>()) {
        prop_assert!(!present(value).compare(&absent()));
        prop_assert!(!absent().compare(&present(value)));

        let same_payload: Outcome<i32, i32> = success(value);
        prop_assert!(!same_payload.compare(&failure(value)));
    }
}

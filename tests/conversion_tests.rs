//! Tests for conversions between Optional, Outcome and their std counterparts.

use duplex::container::{Optional, Outcome, absent, failure, present, success};
use rstest::rstest;

#[rstest]
fn present_to_outcome_is_success() {
    assert_eq!(present(1).to_outcome("unused"), success(1));
}

#[rstest]
fn absent_to_outcome_uses_supplied_error() {
    let outcome = absent::<i32>().to_outcome("missing");
    assert_eq!(outcome, failure("missing"));
    assert_eq!(outcome.expect_err("absent converts to failure"), "missing");
}

#[rstest]
fn success_to_optional_is_present() {
    assert!(success::<_, ()>(5).to_optional().compare(&present(5)));
}

#[rstest]
fn failure_to_optional_discards_error() {
    assert!(failure::<i32, _>("dropped").to_optional().none());
}

#[rstest]
#[case(present(9))]
#[case(absent())]
fn round_trip_through_outcome(#[case] original: Optional<i32>) {
    let back = original.to_outcome("e").to_optional();
    assert!(back.compare(&original));
}

#[rstest]
fn std_option_interop() {
    let from_std: Optional<&str> = Some("x").into();
    assert_eq!(from_std, present("x"));

    let to_std: Option<&str> = absent::<&str>().into();
    assert_eq!(to_std, None);
}

#[rstest]
fn std_result_interop() {
    fn parse(text: &str) -> Outcome<u8, std::num::ParseIntError> {
        text.parse::<u8>().into()
    }

    assert_eq!(parse("7"), success(7));
    assert!(parse("300").err());

    let result: Result<u8, std::num::ParseIntError> = parse("8").into();
    assert_eq!(result, Ok(8));
}

#[rstest]
fn to_outcome_with_only_builds_error_when_absent() {
    let built = absent::<i32>().to_outcome_with(|| format!("code {}", 17));
    assert_eq!(built, failure("code 17".to_string()));

    let skipped: Outcome<i32, String> =
        present(1).to_outcome_with(|| panic!("error must not be built"));
    assert!(skipped.ok());
}

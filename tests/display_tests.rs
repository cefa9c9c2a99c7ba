//! Integration tests for Display implementations.

use duplex::container::{Optional, Outcome, UnwrapError, absent, failure, present, success};

#[test]
fn test_present_display() {
    assert_eq!(format!("{}", present(42)), "Present(42)");
}

#[test]
fn test_absent_display() {
    let value: Optional<i32> = absent();
    assert_eq!(format!("{value}"), "Absent");
}

#[test]
fn test_success_display() {
    let outcome: Outcome<&str, i32> = success("done");
    assert_eq!(format!("{outcome}"), "Success(done)");
}

#[test]
fn test_failure_display() {
    let outcome: Outcome<i32, &str> = failure("boom");
    assert_eq!(format!("{outcome}"), "Failure(boom)");
}

#[test]
fn test_nested_display() {
    let nested: Outcome<Optional<i32>, &str> = success(present(1));
    assert_eq!(nested.to_string(), "Success(Present(1))");
}

#[test]
fn test_unwrap_error_display() {
    let error = UnwrapError::failure_value("decode", &"bad byte");
    assert_eq!(error.to_string(), "decode: \"bad byte\"");
}

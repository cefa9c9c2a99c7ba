//! Violation errors raised by the unwrap family.
//!
//! Calling `expect`/`unwrap` on the inactive variant of a container is a
//! logic error: the caller ignored the discriminant. The panicking methods
//! build an [`UnwrapError`] describing the violation, log it through
//! `tracing` and panic with its rendering. The `try_*` methods hand the
//! same value back as an `Err` instead.
//!
//! # Examples
//!
//! ```rust
//! use duplex::container::{UnwrapError, ViolationKind, absent};
//!
//! let error: UnwrapError = absent::<i32>().try_expect("config loaded").unwrap_err();
//! assert_eq!(error.kind(), ViolationKind::AbsentValue);
//! assert_eq!(error.message(), "config loaded");
//! assert_eq!(format!("{error}"), "config loaded");
//! ```

use std::fmt;

/// The direction of an unwrap violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    /// A value was requested from an `Absent` optional.
    AbsentValue,
    /// A value was requested from a `Failure` outcome.
    FailureValue,
    /// An error was requested from a `Success` outcome.
    UnexpectedSuccess,
}

impl ViolationKind {
    /// Returns a stable snake-case name, used as a structured log field.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AbsentValue => "absent_value",
            Self::FailureValue => "failure_value",
            Self::UnexpectedSuccess => "unexpected_success",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Describes a call to the unwrap family on the wrong variant.
///
/// `message` is always the caller-supplied message (or the fixed default of
/// the zero-argument forms). `payload` is the `Debug` rendering of the
/// opposite-track payload when the operation reports one.
///
/// # Examples
///
/// ```rust
/// use duplex::container::{UnwrapError, ViolationKind, failure};
///
/// let error = failure::<i32, _>("disk full").try_expect("write batch").unwrap_err();
/// assert_eq!(error.kind(), ViolationKind::FailureValue);
/// assert_eq!(error.payload(), Some("\"disk full\""));
/// assert_eq!(error.to_string(), "write batch: \"disk full\"");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnwrapError {
    kind: ViolationKind,
    message: String,
    payload: Option<String>,
}

impl UnwrapError {
    /// An `Absent` optional was unwrapped.
    pub fn absent_value(message: impl Into<String>) -> Self {
        Self {
            kind: ViolationKind::AbsentValue,
            message: message.into(),
            payload: None,
        }
    }

    /// A `Failure` outcome was unwrapped; `error` is embedded in the message.
    pub fn failure_value<E: fmt::Debug>(message: impl Into<String>, error: &E) -> Self {
        Self {
            kind: ViolationKind::FailureValue,
            message: message.into(),
            payload: Some(format!("{error:?}")),
        }
    }

    /// A `Success` outcome was asked for its error.
    pub fn unexpected_success(message: impl Into<String>) -> Self {
        Self {
            kind: ViolationKind::UnexpectedSuccess,
            message: message.into(),
            payload: None,
        }
    }

    /// Like [`UnwrapError::unexpected_success`], also reporting the value.
    pub fn unexpected_success_with<T: fmt::Debug>(message: impl Into<String>, value: &T) -> Self {
        Self {
            kind: ViolationKind::UnexpectedSuccess,
            message: message.into(),
            payload: Some(format!("{value:?}")),
        }
    }

    /// Which direction the violation went.
    pub const fn kind(&self) -> ViolationKind {
        self.kind
    }

    /// The caller-supplied (or default) message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The `Debug` rendering of the payload on the other track, if reported.
    pub fn payload(&self) -> Option<&str> {
        self.payload.as_deref()
    }
}

impl fmt::Display for UnwrapError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.payload {
            Some(payload) => write!(formatter, "{}: {payload}", self.message),
            None => formatter.write_str(&self.message),
        }
    }
}

impl std::error::Error for UnwrapError {}

/// Logs the violation and panics with its rendering.
///
/// The panic message is exactly `error.to_string()`, so the caller's
/// message can be recovered from the panic payload.
#[track_caller]
#[cold]
pub(crate) fn raise(error: UnwrapError) -> ! {
    tracing::error!(
        target: "duplex::violation",
        kind = error.kind.as_str(),
        detail = %error,
        "container unwrapped on the wrong variant"
    );
    panic!("{error}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn absent_value_renders_message_only() {
        let error = UnwrapError::absent_value("no user");
        assert_eq!(error.kind(), ViolationKind::AbsentValue);
        assert_eq!(error.payload(), None);
        assert_eq!(format!("{error}"), "no user");
    }

    #[rstest]
    fn failure_value_embeds_debug_payload() {
        let error = UnwrapError::failure_value("parse", &42);
        assert_eq!(error.kind(), ViolationKind::FailureValue);
        assert_eq!(error.message(), "parse");
        assert_eq!(format!("{error}"), "parse: 42");
    }

    #[rstest]
    fn unexpected_success_with_reports_value() {
        let error = UnwrapError::unexpected_success_with("want error", &"fine");
        assert_eq!(format!("{error}"), "want error: \"fine\"");
    }

    #[rstest]
    #[case(ViolationKind::AbsentValue, "absent_value")]
    #[case(ViolationKind::FailureValue, "failure_value")]
    #[case(ViolationKind::UnexpectedSuccess, "unexpected_success")]
    fn violation_kind_names(#[case] kind: ViolationKind, #[case] expected: &str) {
        assert_eq!(kind.as_str(), expected);
        assert_eq!(kind.to_string(), expected);
    }

    #[rstest]
    #[should_panic(expected = "lookup failed: \"missing\"")]
    fn raise_panics_with_rendering() {
        raise(UnwrapError::failure_value("lookup failed", &"missing"));
    }

    #[test]
    fn unwrap_error_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<UnwrapError>();
    }
}

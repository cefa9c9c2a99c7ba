//! Conversions between the two containers and their std counterparts.
//!
//! - [`Optional::to_outcome`] needs an error for the `Absent` case.
//! - [`Outcome::to_optional`] discards the error.
//! - `From` impls bridge `Option`/`Result` so the containers compose with
//!   `?`-based std code at the boundary.
//!
//! # Examples
//!
//! ```rust
//! use duplex::container::{Outcome, absent, failure, present};
//!
//! let round_trip = present(5).to_outcome("missing").to_optional();
//! assert!(round_trip.compare(&present(5)));
//!
//! assert_eq!(absent::<i32>().to_outcome("missing"), failure("missing"));
//!
//! let parsed: Outcome<i32, _> = "12".parse::<i32>().into();
//! assert!(parsed.ok());
//! let back: Result<i32, std::num::ParseIntError> = parsed.into();
//! assert_eq!(back, Ok(12));
//! ```

use super::optional::Optional;
use super::outcome::Outcome;

impl<T> Optional<T> {
    /// Converts into an outcome, using `error` for the `Absent` case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duplex::container::{absent, failure, present, success};
    ///
    /// assert_eq!(present(1).to_outcome("none"), success(1));
    /// assert_eq!(absent::<i32>().to_outcome("none"), failure("none"));
    /// ```
    #[inline]
    pub fn to_outcome<E>(self, error: E) -> Outcome<T, E> {
        match self {
            Self::Present(value) => Outcome::Success(value),
            Self::Absent => Outcome::Failure(error),
        }
    }

    /// Like [`Optional::to_outcome`], computing the error only when absent.
    #[inline]
    pub fn to_outcome_with<E, F>(self, error: F) -> Outcome<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Present(value) => Outcome::Success(value),
            Self::Absent => Outcome::Failure(error()),
        }
    }
}

impl<T, E> Outcome<T, E> {
    /// Converts into an optional, discarding any error.
    #[inline]
    pub fn to_optional(self) -> Optional<T> {
        match self {
            Self::Success(value) => Optional::Present(value),
            Self::Failure(_) => Optional::Absent,
        }
    }

    /// Converts into an optional of the error, discarding any value.
    #[inline]
    pub fn to_error_optional(self) -> Optional<E> {
        match self {
            Self::Success(_) => Optional::Absent,
            Self::Failure(error) => Optional::Present(error),
        }
    }
}

// =============================================================================
// std Interop
// =============================================================================

impl<T> From<Option<T>> for Optional<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(optional: Optional<T>) -> Self {
        match optional {
            Optional::Present(value) => Some(value),
            Optional::Absent => None,
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    /// `Ok(v)` becomes `Success(v)`, `Err(e)` becomes `Failure(e)`.
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}

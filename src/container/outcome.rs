//! Outcome type - the result of a computation that may fail.
//!
//! `Outcome<T, E>` is either `Success(T)` or `Failure(E)`. It has two
//! tracks: combinators on the value track (`map`, `and_then`) leave a
//! `Failure` untouched, combinators on the error track (`map_err`,
//! `or_else`) leave a `Success` untouched. A supplied function is never
//! invoked on the track it does not apply to.
//!
//! # Examples
//!
//! ```rust
//! use duplex::container::{Outcome, failure, success};
//!
//! fn parse(text: &str) -> Outcome<i32, String> {
//!     match text.parse::<i32>() {
//!         Ok(value) => success(value),
//!         Err(error) => failure(error.to_string()),
//!     }
//! }
//!
//! let doubled = parse("21").map(|x| x * 2);
//! assert_eq!(doubled.unwrap(), 42);
//!
//! let recovered = parse("x").or_else(|_| success::<i32, String>(0));
//! assert_eq!(recovered, success(0));
//! ```

use std::fmt;

use super::error::{UnwrapError, raise};

const UNWRAP_FAILURE: &str = "called `Outcome::unwrap()` on a `Failure` value";
const UNWRAP_ERR_SUCCESS: &str = "called `Outcome::unwrap_err()` on a `Success` value";

/// A value that is either a success or a failure.
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the failure error
///
/// # Examples
///
/// ```rust
/// use duplex::container::{Outcome, failure, success};
///
/// let outcome: Outcome<i32, &str> = success(42);
/// assert!(outcome.ok());
///
/// let outcome: Outcome<i32, &str> = failure("boom");
/// assert!(outcome.err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome<T, E> {
    /// The computation succeeded with a value.
    Success(T),
    /// The computation failed with an error.
    Failure(E),
}

static_assertions::assert_impl_all!(Outcome<i32, String>: Send, Sync, Clone);

/// Creates a `Success` outcome.
#[inline]
pub const fn success<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Success(value)
}

/// Alias of [`success`].
#[inline]
pub const fn ok<T, E>(value: T) -> Outcome<T, E> {
    success(value)
}

/// Creates a `Failure` outcome.
#[inline]
pub const fn failure<T, E>(error: E) -> Outcome<T, E> {
    Outcome::Failure(error)
}

/// Alias of [`failure`].
#[inline]
pub const fn err<T, E>(error: E) -> Outcome<T, E> {
    failure(error)
}

impl<T, E> Outcome<T, E> {
    // =========================================================================
    // Discriminant
    // =========================================================================

    /// Returns `true` if this is `Success`.
    #[inline]
    pub const fn ok(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is `Failure`.
    #[inline]
    pub const fn err(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns a reference to the success value, if any.
    #[inline]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns a reference to the error, if any.
    #[inline]
    pub const fn error(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Converts `&Outcome<T, E>` into `Outcome<&T, &E>`.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the success value, panicking if this is a `Failure`.
    ///
    /// # Panics
    ///
    /// Panics if this is `Failure`, with `message` followed by the `Debug`
    /// rendering of the error.
    ///
    /// # Examples
    ///
    /// ```rust,should_panic
    /// use duplex::container::failure;
    ///
    /// // panics with `loading settings: "file not found"`
    /// failure::<(), _>("file not found").expect("loading settings");
    /// ```
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => raise(UnwrapError::failure_value(message, &error)),
        }
    }

    /// Returns the error, panicking with `message` if this is a `Success`.
    ///
    /// # Panics
    ///
    /// Panics if this is `Success`.
    #[inline]
    #[track_caller]
    pub fn expect_err(self, message: &str) -> E {
        match self {
            Self::Success(_) => raise(UnwrapError::unexpected_success(message)),
            Self::Failure(error) => error,
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics if this is `Failure`; the message embeds the error.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: fmt::Debug,
    {
        self.expect(UNWRAP_FAILURE)
    }

    /// Returns the error.
    ///
    /// # Panics
    ///
    /// Panics if this is `Success`; the message embeds the value.
    #[inline]
    #[track_caller]
    pub fn unwrap_err(self) -> E
    where
        T: fmt::Debug,
    {
        match self {
            Self::Success(value) => raise(UnwrapError::unexpected_success_with(
                UNWRAP_ERR_SUCCESS,
                &value,
            )),
            Self::Failure(error) => error,
        }
    }

    /// Non-panicking form of [`Outcome::expect`].
    ///
    /// # Errors
    ///
    /// Returns the failure violation `expect` would have panicked with.
    #[inline]
    pub fn try_expect(self, message: &str) -> Result<T, UnwrapError>
    where
        E: fmt::Debug,
    {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(UnwrapError::failure_value(message, &error)),
        }
    }

    /// Non-panicking form of [`Outcome::expect_err`].
    ///
    /// # Errors
    ///
    /// Returns the violation `expect_err` would have panicked with.
    #[inline]
    pub fn try_expect_err(self, message: &str) -> Result<E, UnwrapError> {
        match self {
            Self::Success(_) => Err(UnwrapError::unexpected_success(message)),
            Self::Failure(error) => Ok(error),
        }
    }

    /// Returns the success value, or `default` on failure.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the success value, or computes one from the error.
    #[inline]
    pub fn unwrap_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => fallback(error),
        }
    }

    /// Returns the success value, or `T::default()` on failure.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(|_| T::default())
    }

    // =========================================================================
    // Value Track
    // =========================================================================

    /// Chains a computation on the success value.
    ///
    /// For `Success(v)` returns `mapper(v)`, which may itself fail. A
    /// `Failure` keeps its error and `mapper` is not invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duplex::container::{Outcome, failure, success};
    ///
    /// let stringified = success::<i32, String>(42).and_then(|v| success(v.to_string()));
    /// assert_eq!(stringified.unwrap(), "42");
    ///
    /// let rejected = success::<i32, &str>(42).and_then(|_| failure::<i32, _>("42"));
    /// assert_eq!(rejected.expect_err("rejected"), "42");
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, mapper: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Success(value) => mapper(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Transforms the success value. A `Failure` passes through untouched.
    #[inline]
    pub fn map<U, F>(self, mapper: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(mapper(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    // =========================================================================
    // Error Track
    // =========================================================================

    /// Recovers from a failure.
    ///
    /// For `Failure(e)` returns `mapper(e)`, which may change the error
    /// type. A `Success` keeps its value and `mapper` is not invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duplex::container::{failure, success};
    ///
    /// let recovered = failure::<String, i32>(42).or_else(|e| success::<_, ()>(e.to_string()));
    /// assert_eq!(recovered.unwrap(), "42");
    /// ```
    #[inline]
    pub fn or_else<E2, G>(self, mapper: G) -> Outcome<T, E2>
    where
        G: FnOnce(E) -> Outcome<T, E2>,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => mapper(error),
        }
    }

    /// Transforms the error. A `Success` passes through untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duplex::container::{Outcome, failure};
    ///
    /// let outcome: Outcome<i32, &str> = failure("timeout");
    /// assert_eq!(outcome.map_err(str::len), failure(7));
    /// ```
    #[inline]
    pub fn map_err<E2, G>(self, mapper: G) -> Outcome<T, E2>
    where
        G: FnOnce(E) -> E2,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(mapper(error)),
        }
    }

    // =========================================================================
    // Equality
    // =========================================================================

    /// Structural equality.
    ///
    /// A `Success` equals only a `Success` with an equal value, a `Failure`
    /// only a `Failure` with an equal error. Cross-variant comparisons are
    /// always `false`, even when the payloads are equal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duplex::container::{Outcome, failure, success};
    ///
    /// let left: Outcome<i32, i32> = success(42);
    /// assert!(left.compare(&success(42)));
    /// assert!(!left.compare(&failure(42)));
    /// ```
    #[inline]
    pub fn compare(&self, other: &Self) -> bool
    where
        T: PartialEq,
        E: PartialEq,
    {
        match (self, other) {
            (Self::Success(left), Self::Success(right)) => left == right,
            (Self::Failure(left), Self::Failure(right)) => left == right,
            _ => false,
        }
    }
}

impl<T, E> Outcome<Outcome<T, E>, E> {
    /// Removes one level of nesting on the value track.
    #[inline]
    pub fn flatten(self) -> Outcome<T, E> {
        self.and_then(|inner| inner)
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Outcome<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(formatter, "Success({value})"),
            Self::Failure(error) => write!(formatter, "Failure({error})"),
        }
    }
}

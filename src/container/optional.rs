//! Optional type - a value that may or may not be present.
//!
//! `Optional<T>` is either `Present(T)` or `Absent`. Every combinator
//! consumes the container and returns a new one; combinators never invoke a
//! supplied function on the variant they do not apply to.
//!
//! # Examples
//!
//! ```rust
//! use duplex::container::{Optional, absent, present};
//!
//! let port = present("8080")
//!     .and_then(|text| Optional::from(text.parse::<u16>().ok()))
//!     .map(|port| port + 1);
//! assert_eq!(port, present(8081));
//!
//! let missing: Optional<u16> = absent();
//! assert_eq!(missing.unwrap_or(80), 80);
//!
//! match port {
//!     Optional::Present(port) => assert_eq!(port, 8081),
//!     Optional::Absent => unreachable!(),
//! }
//! ```

use std::fmt;

use super::error::{UnwrapError, raise};

const UNWRAP_ABSENT: &str = "called `Optional::unwrap()` on an `Absent` value";

/// A value that is either present or absent.
///
/// The variant is the discriminant: [`Optional::some`] and
/// [`Optional::none`] report it, and a `match` narrows the payload.
///
/// # Examples
///
/// ```rust
/// use duplex::container::{Optional, present};
///
/// let value: Optional<i32> = present(21);
/// assert!(value.some());
/// assert_eq!(value.map(|x| x * 2).unwrap(), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Optional<T> {
    /// Holds a value.
    Present(T),
    /// Holds nothing.
    Absent,
}

static_assertions::assert_impl_all!(Optional<i32>: Send, Sync, Copy);
static_assertions::assert_impl_all!(Optional<String>: Send, Sync, Clone);

/// Creates a `Present` optional.
#[inline]
pub const fn present<T>(value: T) -> Optional<T> {
    Optional::Present(value)
}

/// Alias of [`present`].
#[inline]
pub const fn some<T>(value: T) -> Optional<T> {
    present(value)
}

/// Creates an `Absent` optional.
#[inline]
pub const fn absent<T>() -> Optional<T> {
    Optional::Absent
}

/// Alias of [`absent`].
#[inline]
pub const fn none<T>() -> Optional<T> {
    absent()
}

impl<T> Optional<T> {
    // =========================================================================
    // Discriminant
    // =========================================================================

    /// Returns `true` if this is `Present`.
    ///
    /// Exactly one of `some` and `none` is `true`.
    #[inline]
    pub const fn some(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if this is `Absent`.
    #[inline]
    pub const fn none(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns a reference to the value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duplex::container::{Optional, absent, present};
    ///
    /// assert_eq!(present(3).value(), Some(&3));
    /// assert_eq!(absent::<i32>().value(), None);
    /// ```
    #[inline]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    /// Converts `&Optional<T>` into `Optional<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Present(value) => Optional::Present(value),
            Self::Absent => Optional::Absent,
        }
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the value, panicking with `message` if absent.
    ///
    /// # Panics
    ///
    /// Panics if this is `Absent`. The panic message is `message`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duplex::container::present;
    ///
    /// assert_eq!(present("token").expect("token is configured"), "token");
    /// ```
    ///
    /// ```rust,should_panic
    /// use duplex::container::absent;
    ///
    /// absent::<i32>().expect("token is configured");
    /// ```
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => raise(UnwrapError::absent_value(message)),
        }
    }

    /// Returns the value, panicking with a fixed message if absent.
    ///
    /// # Panics
    ///
    /// Panics if this is `Absent`.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        self.expect(UNWRAP_ABSENT)
    }

    /// Non-panicking form of [`Optional::expect`].
    ///
    /// # Errors
    ///
    /// Returns the absence violation `expect` would have panicked with.
    #[inline]
    pub fn try_expect(self, message: &str) -> Result<T, UnwrapError> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(UnwrapError::absent_value(message)),
        }
    }

    /// Returns the value, or `default` if absent.
    ///
    /// `default` is evaluated eagerly; use [`Optional::unwrap_or_else`] for
    /// a lazily computed fallback.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => default,
        }
    }

    /// Returns the value, or computes one if absent.
    #[inline]
    pub fn unwrap_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => fallback(),
        }
    }

    /// Returns the value, or `T::default()` if absent.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(T::default)
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Chains a computation that may itself be absent.
    ///
    /// For `Present(v)` returns `mapper(v)`. For `Absent` returns `Absent`
    /// without invoking `mapper`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duplex::container::{Optional, absent, present};
    ///
    /// fn half(n: i32) -> Optional<i32> {
    ///     if n % 2 == 0 { present(n / 2) } else { absent() }
    /// }
    ///
    /// assert_eq!(present(8).and_then(half).and_then(half), present(2));
    /// assert_eq!(present(6).and_then(half).and_then(half), absent());
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, mapper: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Self::Present(value) => mapper(value),
            Self::Absent => Optional::Absent,
        }
    }

    /// Supplies an alternative when absent.
    ///
    /// For `Present` returns `self` without invoking `mapper`. For `Absent`
    /// returns `mapper()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duplex::container::{absent, present};
    ///
    /// assert_eq!(absent().or_else(|| present(1)), present(1));
    /// assert_eq!(present(2).or_else(|| present(1)), present(2));
    /// ```
    #[inline]
    pub fn or_else<F>(self, mapper: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Present(_) => self,
            Self::Absent => mapper(),
        }
    }

    /// Transforms the value if present.
    ///
    /// `Absent` is returned untouched and `mapper` is not invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duplex::container::{Optional, absent, present};
    ///
    /// assert_eq!(present("four").map(str::len), present(4));
    ///
    /// let nothing: Optional<&str> = absent();
    /// assert_eq!(nothing.map(str::len), absent());
    /// ```
    #[inline]
    pub fn map<U, F>(self, mapper: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => Optional::Present(mapper(value)),
            Self::Absent => Optional::Absent,
        }
    }

    /// Keeps the value only if `predicate` holds for it.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if let Self::Present(value) = self
            && predicate(&value)
        {
            return Self::Present(value);
        }
        Self::Absent
    }

    /// Structural equality.
    ///
    /// `Present` equals only a `Present` with an equal value; `Absent`
    /// equals only `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duplex::container::{absent, present};
    ///
    /// assert!(present(42).compare(&present(42)));
    /// assert!(!present(42).compare(&absent()));
    /// assert!(absent::<i32>().compare(&absent()));
    /// ```
    #[inline]
    pub fn compare(&self, other: &Self) -> bool
    where
        T: PartialEq,
    {
        match (self, other) {
            (Self::Present(left), Self::Present(right)) => left == right,
            (Self::Absent, Self::Absent) => true,
            _ => false,
        }
    }
}

impl<T> Optional<Optional<T>> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Optional<T> {
        self.and_then(|inner| inner)
    }
}

impl<T> Default for Optional<T> {
    /// Defaults to `Absent`.
    #[inline]
    fn default() -> Self {
        Self::Absent
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => write!(formatter, "Present({value})"),
            Self::Absent => formatter.write_str("Absent"),
        }
    }
}

//! Applicative type class - combining independent computations.
//!
//! `pure` lifts a value into the active variant (`Present`/`Success`);
//! `map2` combines two containers, producing the inactive variant if
//! either side is inactive. For `Outcome` the leftmost failure wins.
//!
//! # Examples
//!
//! ```rust
//! use duplex::container::{Optional, Outcome, absent, failure, present, success};
//! use duplex::typeclass::Applicative;
//!
//! let lifted: Optional<i32> = <Optional<()>>::pure(42);
//! assert_eq!(lifted, present(42));
//!
//! assert_eq!(present(1).map2(present(2), |a, b| a + b), present(3));
//! assert_eq!(present(1).map2(absent::<i32>(), |a, b| a + b), absent());
//!
//! let first: Outcome<i32, &str> = failure("first");
//! let second: Outcome<i32, &str> = failure("second");
//! assert_eq!(first.map2(second, |a, b| a + b), failure("first"));
//! assert_eq!(success::<i32, &str>(2).product(success(3)), success((2, 3)));
//! ```

use super::functor::Functor;
use crate::container::{Optional, Outcome};

/// A type class for lifting values and combining independent computations.
///
/// # Laws
///
/// ## Identity Law
///
/// ```text
/// v.map2(pure(()), |x, _| x) == v
/// ```
///
/// ## Homomorphism Law
///
/// ```text
/// pure(a).map2(pure(b), f) == pure(f(a, b))
/// ```
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines two applicative values into a tuple.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Evaluates both and keeps the left value.
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Evaluates both and keeps the right value.
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }
}

impl<A> Applicative for Optional<A> {
    #[inline]
    fn pure<B>(value: B) -> Optional<B> {
        Optional::Present(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Optional<B>, function: F) -> Optional<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Present(a), Optional::Present(b)) => Optional::Present(function(a, b)),
            _ => Optional::Absent,
        }
    }
}

impl<T, E: Clone> Applicative for Outcome<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Outcome<B, E> {
        Outcome::Success(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Outcome<B, E>, function: F) -> Outcome<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Self::Success(a), Outcome::Success(b)) => Outcome::Success(function(a, b)),
            (Self::Failure(error), _) | (Self::Success(_), Outcome::Failure(error)) => {
                Outcome::Failure(error)
            }
        }
    }
}

//! Monad type class - sequencing dependent computations.
//!
//! `flat_map` is the generic form of the inherent `and_then` on both
//! containers: the inactive variant short-circuits and the function is not
//! invoked.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! m.flat_map(pure) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use duplex::container::{Optional, absent, present};
//! use duplex::typeclass::Monad;
//!
//! fn positive(n: i32) -> Optional<i32> {
//!     if n > 0 { present(n) } else { absent() }
//! }
//!
//! assert_eq!(present(5).flat_map(positive), present(5));
//! assert_eq!(present(-5).flat_map(positive), absent());
//! assert_eq!(present(1).then(present("next")), present("next"));
//! ```

use super::applicative::Applicative;
use crate::container::{Optional, Outcome};

/// A type class for sequencing computations where each step depends on the
/// previous result.
pub trait Monad: Applicative {
    /// Applies a function to the value inside the monad and flattens the result.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Sequences two monadic computations, discarding the first result.
    ///
    /// If `self` is the inactive variant it propagates and `next` is
    /// dropped.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<A> Monad for Optional<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(A) -> Optional<B>,
    {
        self.and_then(function)
    }
}

impl<T, E: Clone> Monad for Outcome<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(T) -> Outcome<B, E>,
    {
        self.and_then(function)
    }
}

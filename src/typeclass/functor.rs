//! Functor type class - mapping over container values.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use duplex::container::{Optional, Outcome, absent, failure, present};
//! use duplex::typeclass::Functor;
//!
//! let transformed: Optional<String> = present(5).fmap(|n| n.to_string());
//! assert_eq!(transformed, present("5".to_string()));
//!
//! let untouched: Outcome<i32, &str> = failure::<i32, _>("bad").fmap(|n| n + 1);
//! assert_eq!(untouched, failure("bad"));
//!
//! let nothing: Optional<i32> = absent();
//! assert_eq!(nothing.fmap(|n| n * 2), absent());
//! ```

use super::higher::TypeConstructor;
use crate::container::{Optional, Outcome};

/// A type class for types that can have a function mapped over their contents.
///
/// For both containers `fmap` is the inherent `map`: only the active
/// variant is transformed.
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duplex::container::{Optional, present};
    /// use duplex::typeclass::Functor;
    ///
    /// let name: Optional<String> = present("ferris".to_string());
    /// assert_eq!(name.fmap_ref(|s| s.len()), present(6));
    /// assert!(name.some());
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

// =============================================================================
// Optional<A> Implementation
// =============================================================================

impl<A> Functor for Optional<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Optional<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

// =============================================================================
// Outcome<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Functor for Outcome<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(&T) -> B,
    {
        self.as_ref().map(function).map_err(E::clone)
    }
}

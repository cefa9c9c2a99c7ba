//! Bifunctor type class - mapping over both tracks of an `Outcome`.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! bf.bimap(|x| x, |y| y) == bf
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! bf.bimap(|x| f2(f1(x)), |y| g2(g1(y))) == bf.bimap(f1, g1).bimap(f2, g2)
//! ```
//!
//! ## first/second Consistency Law
//!
//! ```text
//! bf.bimap(f, g) == bf.first(f).second(g) == bf.second(g).first(f)
//! ```
//!
//! # Type Parameter Order
//!
//! `Outcome<T, E>` is implemented as `Bifunctor<E, T>`:
//! - `first`: transforms the error, equivalent to `map_err`
//! - `second`: transforms the success value, equivalent to `map`
//!
//! so that `second` agrees with `Functor::fmap`.
//!
//! # Examples
//!
//! ```rust
//! use duplex::container::{Outcome, failure, success};
//! use duplex::typeclass::Bifunctor;
//!
//! let failed: Outcome<i32, String> = failure("oops".to_string());
//! assert_eq!(failed.bimap(|e| e.len(), |x| x * 2), failure(4));
//!
//! let succeeded: Outcome<i32, String> = success(21);
//! assert_eq!(succeeded.bimap(|e| e.len(), |x| x * 2), success(42));
//! ```

use crate::container::Outcome;

/// A type class for types with two type parameters that can have functions
/// mapped over both.
pub trait Bifunctor<A, B> {
    /// The resulting type after applying the transformation.
    ///
    /// For `Outcome<T, E>` (implemented as `Bifunctor<E, T>`),
    /// `Target<C, D> = Outcome<D, C>`.
    type Target<C, D>;

    /// Applies two functions to both type parameters simultaneously.
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D;

    /// Applies a function to the first type parameter only.
    fn first<C, F>(self, function: F) -> Self::Target<C, B>
    where
        F: FnOnce(A) -> C;

    /// Applies a function to the second type parameter only.
    fn second<D, G>(self, function: G) -> Self::Target<A, D>
    where
        G: FnOnce(B) -> D;

    /// Applies two functions by reference, leaving `self` intact.
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(&A) -> C,
        G: FnOnce(&B) -> D;
}

impl<T, E> Bifunctor<E, T> for Outcome<T, E> {
    type Target<C, D> = Outcome<D, C>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Outcome<D, C>
    where
        F: FnOnce(E) -> C,
        G: FnOnce(T) -> D,
    {
        match self {
            Self::Success(value) => Outcome::Success(second_function(value)),
            Self::Failure(error) => Outcome::Failure(first_function(error)),
        }
    }

    #[inline]
    fn first<C, F>(self, function: F) -> Outcome<T, C>
    where
        F: FnOnce(E) -> C,
    {
        self.map_err(function)
    }

    #[inline]
    fn second<D, G>(self, function: G) -> Outcome<D, E>
    where
        G: FnOnce(T) -> D,
    {
        self.map(function)
    }

    #[inline]
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Outcome<D, C>
    where
        F: FnOnce(&E) -> C,
        G: FnOnce(&T) -> D,
    {
        self.as_ref().bimap(first_function, second_function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::{failure, success};
    use rstest::rstest;

    #[rstest]
    fn first_on_success_is_untouched() {
        let outcome: Outcome<i32, String> = success(1);
        let result = outcome.first(|_: String| -> usize { panic!("must not run") });
        assert_eq!(result, success(1));
    }

    #[rstest]
    fn second_on_failure_is_untouched() {
        let outcome: Outcome<i32, &str> = failure("e");
        let result = outcome.second(|_| -> i32 { panic!("must not run") });
        assert_eq!(result, failure("e"));
    }

    #[rstest]
    fn bimap_ref_keeps_original() {
        let outcome: Outcome<String, String> = success("abc".to_string());
        assert_eq!(outcome.bimap_ref(String::len, String::len), success(3));
        assert!(outcome.ok());
    }
}

//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Optional<_>` or `Outcome<_, E>` as type
//! constructors directly. [`TypeConstructor`] names the applied type
//! (`Inner`) and the same constructor applied to another type
//! (`WithType<B>`), which is enough to state `Functor` and `Monad`.
//!
//! # Example
//!
//! ```rust
//! use duplex::container::{Optional, present};
//! use duplex::typeclass::TypeConstructor;
//!
//! fn reset<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let cleared: Optional<String> = reset(present(42));
//! assert!(cleared.none());
//! ```

use crate::container::{Optional, Outcome};

/// A trait representing a type constructor.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The type this constructor is applied to.
    ///
    /// For `Optional<i32>` this is `i32`; for `Outcome<i32, E>` it is the
    /// success type `i32`.
    type Inner;

    /// The same constructor applied to `B`.
    ///
    /// For `Outcome<T, E>` the error type is kept: `WithType<B>` is
    /// `Outcome<B, E>`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Optional<A> {
    type Inner = A;
    type WithType<B> = Optional<B>;
}

impl<T, E> TypeConstructor for Outcome<T, E> {
    type Inner = T;
    type WithType<B> = Outcome<B, E>;
}

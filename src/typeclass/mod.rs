//! Type class instances for the containers.
//!
//! - [`Functor`]: Mapping over the active variant
//! - [`Applicative`]: Lifting values and combining independent containers
//! - [`Monad`]: Sequencing dependent computations
//! - [`Bifunctor`]: Mapping over both tracks of an `Outcome`
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types (GAT) to emulate HKT
//! behavior so that the traits above can be stated once for both
//! containers.
//!
//! # Examples
//!
//! ```rust
//! use duplex::container::{Optional, absent, present};
//! use duplex::typeclass::{Applicative, Functor, Monad};
//!
//! fn increment_all<F: Functor<Inner = i32>>(container: F) -> F::WithType<i32> {
//!     container.fmap(|x| x + 1)
//! }
//!
//! assert_eq!(increment_all(present(1)), present(2));
//! assert_eq!(present(1).map2(present(2), |a, b| a + b), present(3));
//!
//! let nothing: Optional<i32> = absent();
//! assert_eq!(nothing.flat_map(|x| present(x * 2)), absent());
//! ```

mod applicative;
mod bifunctor;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use bifunctor::Bifunctor;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;

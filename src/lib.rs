//! # duplex
//!
//! Two immutable algebraic containers with a shared combinator vocabulary.
//!
//! ## Overview
//!
//! - **[`Optional<T>`](container::Optional)**: `Present(T)` or `Absent`
//! - **[`Outcome<T, E>`](container::Outcome)**: `Success(T)` or `Failure(E)`
//!
//! Both support `map`, `and_then`, `or_else`, `unwrap_or`, `expect`,
//! `unwrap` and structural `compare`, and convert into each other.
//! Combinators never invoke a supplied function on the variant they do not
//! apply to. Calling the unwrap family on the wrong variant is a logic
//! error and panics with an [`UnwrapError`](container::UnwrapError)
//! rendering; the `try_*` forms return it instead.
//!
//! ## Feature Flags
//!
//! - `typeclass`: Functor, Applicative, Monad and Bifunctor instances
//!   (enabled by default)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use duplex::prelude::*;
//!
//! let stringified = ok::<i32, String>(42).and_then(|v| ok(v.to_string()));
//! assert_eq!(stringified.unwrap(), "42");
//!
//! let rejected = ok::<i32, &str>(42).and_then(|_| err::<i32, _>("42"));
//! assert_eq!(rejected.expect_err("should be rejected"), "42");
//!
//! let recovered = err::<String, i32>(42).or_else(|e| ok::<_, ()>(e.to_string()));
//! assert_eq!(recovered.unwrap(), "42");
//!
//! let round_trip = present(7).to_outcome("missing").to_optional();
//! assert!(round_trip.compare(&present(7)));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the containers, their constructors and, with the
/// `typeclass` feature, the type class traits.
///
/// # Usage
///
/// ```rust
/// use duplex::prelude::*;
///
/// assert!(present(1).some());
/// ```
pub mod prelude {
    pub use crate::container::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;
}

pub mod container;

#[cfg(feature = "typeclass")]
pub mod typeclass;

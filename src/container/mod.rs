//! The two containers and their constructors.
//!
//! - [`Optional`]: `Present(T)` or `Absent`
//! - [`Outcome`]: `Success(T)` or `Failure(E)`
//! - [`UnwrapError`]: the violation raised by the `expect`/`unwrap` family
//!
//! Both containers are closed two-variant enums, so a `match` over either
//! is checked exhaustive and narrows the payload in each arm.
//!
//! # Examples
//!
//! ```rust
//! use duplex::container::{Outcome, ok, err, none};
//!
//! let stringified = ok::<i32, String>(42).and_then(|v| ok(v.to_string()));
//! assert_eq!(stringified.unwrap(), "42");
//!
//! let recovered = err::<String, i32>(42).or_else(|e| ok::<_, ()>(e.to_string()));
//! assert_eq!(recovered.unwrap(), "42");
//!
//! let nothing = none::<i32>().map(|_| -> i32 { unreachable!() });
//! assert!(nothing.none());
//!
//! let label = match ok::<u8, &str>(7) {
//!     Outcome::Success(value) => format!("value {value}"),
//!     Outcome::Failure(error) => format!("error {error}"),
//! };
//! assert_eq!(label, "value 7");
//! ```

mod conversion;
mod error;
mod optional;
mod outcome;

pub use error::{UnwrapError, ViolationKind};
pub use optional::{Optional, absent, none, present, some};
pub use outcome::{Outcome, err, failure, ok, success};

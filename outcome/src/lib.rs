//! A two-variant `Result` type and the combinators used to compose fallible
//! computations: [`and`](Result::and), [`or`](Result::or),
//! [`and_then`](Result::and_then), [`map`](Result::map) and the terminal
//! [`conclude`](Result::conclude).
//!
//! ```
//! use outcome::Result::{self, Failure, Success};
//!
//! fn triple(value: i32) -> Result<i32, &'static str> {
//!     if value < 100 { Success(value * 3) } else { Failure("can't go over 100!") }
//! }
//!
//! let report = Success(3)
//!     .and_then(triple)
//!     .map(f64::from)
//!     .conclude(|value| value, |_| f64::NAN);
//! assert!((report - 9.0).abs() < f64::EPSILON);
//! ```
#![no_std]
#![cfg_attr(feature = "nightly", feature(try_trait_v2))]
#![warn(clippy::nursery, clippy::pedantic, clippy::all)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used, clippy::panic))]
#![forbid(unsafe_code)]

extern crate alloc;

mod chain;
mod combinators;
mod conclude;
pub mod observe;
mod result;
#[cfg(feature = "tracing")]
pub mod trace;
#[cfg(feature = "nightly")]
mod try_trait;
pub mod variants;

pub use observe::{Branch, Event, NoOpObserver, Observed, Observer, Operation};
pub use result::{Error, Result};
pub use variants::{Failure, Success};

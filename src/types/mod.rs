//! Value types produced and consumed by decorated calls.
//!
//! # Examples
//!
//! ```
//! use method_rail::{Failure, Outcome};
//!
//! let outcome: Outcome<u32> = Outcome::failure(
//!     Failure::domain("must have 1 or more apples").with_context("calculate_cost"),
//! );
//!
//! println!("{}", outcome);
//! // Output: error: calculate_cost -> must have 1 or more apples
//! ```
use smallvec::SmallVec;

pub mod contract;
pub mod failure;
pub mod outcome;

pub use contract::ContractViolation;
pub use failure::{Failure, FailureKind, UNKNOWN_FAILURE};
pub use outcome::Outcome;

/// SmallVec-backed collection used for failure context.
///
/// Uses inline storage for one element, the common case of a single
/// `with_context` layer.
pub type ErrorVec<E> = SmallVec<[E; 1]>;

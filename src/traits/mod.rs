//! Core traits of the binding machinery.
//!
//! - [`Signature`]: compile-time return/argument extraction from `fn(..) -> R`
//! - [`Invoke`]: the receiver-plus-tuple call shape decorators compose over
//! - [`IntoFailure`]: conversion of error values into a [`Failure`](crate::Failure)
//!
//! # Examples
//!
//! ```
//! use method_rail::traits::{IntoFailure, Invoke, Signature};
//!
//! assert_eq!(<fn() -> u8 as Signature>::ARITY, 0);
//!
//! let double = |base: &i32, (x,): (i32,)| base * x;
//! assert_eq!(double.invoke(&2, (21,)), 42);
//!
//! assert_eq!("bad input".into_failure().message(), "bad input");
//! ```

pub mod into_failure;
pub mod invoke;
pub mod signature;

pub use into_failure::IntoFailure;
pub use invoke::Invoke;
pub use signature::{ArgsOf, OutputOf, Signature};

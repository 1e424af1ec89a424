//! Decorated member functions that bind their own receiver.
//!
//! A [`MemberFn`] is a field that behaves like a method: the owner wires a
//! chain of decorators around a private implementation once, at construction,
//! and callers invoke the field with only the domain arguments.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `method_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Decorated member function
//!
//! ```
//! use std::rc::Rc;
//! use method_rail::prelude::*;
//! use method_rail::sink::MemorySink;
//!
//! struct Apples {
//!     unit_price: f64,
//!     calculate_cost: ApplesFn<fn(i32, f64) -> Outcome<f64>>,
//! }
//!
//! enable_member_fn!(Apples as ApplesFn);
//!
//! impl Apples {
//!     fn new(unit_price: f64, sink: MemorySink) -> Rc<Self> {
//!         Self::new_bound(|me| Apples {
//!             unit_price,
//!             calculate_cost: Self::member_fn(me).with(report_to(
//!                 fail_safe(classmethod(Self::calculate_cost_impl)),
//!                 ReportFormat::labeled("Bag cost $"),
//!                 sink,
//!             )),
//!         })
//!     }
//!
//!     fn calculate_cost_impl(&self, count: i32, weight: f64) -> Result<f64, &'static str> {
//!         if count <= 0 {
//!             return Err("must have 1 or more apples");
//!         }
//!         Ok(f64::from(count) * weight * self.unit_price)
//!     }
//! }
//!
//! let sink = MemorySink::new();
//! let apples = Apples::new(2.0, sink.clone());
//!
//! assert_eq!(apples.calculate_cost.call(3, 1.5).into_value(), 9.0);
//! assert!(apples.calculate_cost.call(0, 1.5).is_failure());
//! assert_eq!(sink.lines(), vec!["Bag cost $9", "There was an error: must have 1 or more apples"]);
//! ```
//!
//! ## Outcome
//!
//! ```
//! use method_rail::{FailureKind, Outcome};
//!
//! let outcome: Outcome<u8> = Outcome::failure(std::io::Error::other("disk full"));
//! assert_eq!(outcome.as_failure().map(|f| f.kind()), Some(FailureKind::Io));
//! ```

/// Time sources for timestamped logging
pub mod clock;
/// Decorator combinators and the receiver adapter
pub mod decorators;
/// Declarative helpers
pub mod macros;
/// Bound member slots and the owner capability
pub mod member;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Destinations for report and log lines
pub mod sink;
/// Core traits: signatures, invocation, failure conversion
pub mod traits;
/// Outcome, Failure and ContractViolation
pub mod types;

/// Tower integration - decorators as `Layer`s (requires `tower` feature)
#[cfg(feature = "tower")]
pub mod tower;

pub use member::{EnableMemberFn, MemberFn};
pub use traits::*;
pub use types::{ContractViolation, ErrorVec, Failure, FailureKind, Outcome, UNKNOWN_FAILURE};

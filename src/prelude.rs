//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use method_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`enable_member_fn!`], [`impl_into_failure!`]
//! - **Types**: [`MemberFn`], [`Outcome`], [`Failure`], [`ReportFormat`], [`LogFormat`]
//! - **Decorators**: [`classmethod`], [`fail_safe`], [`report`], [`report_to`],
//!   [`log_time`], [`log_time_to`], [`with_context`]
//! - **Traits**: [`EnableMemberFn`], [`Invoke`], [`IntoFailure`]

// Macros
pub use crate::{enable_member_fn, impl_into_failure};

// Core types
pub use crate::member::{EnableMemberFn, MemberFn};
pub use crate::types::{Failure, Outcome};

// Decorators
pub use crate::decorators::{
    classmethod, fail_safe, log_time, log_time_to, report, report_to, with_context, LogFormat,
    ReportFormat,
};

// Traits
pub use crate::traits::{IntoFailure, Invoke};

//! Decorator combinators and the receiver adapter.
//!
//! Each combinator takes a chain link and returns a new link of compatible
//! shape, so a chain is plain nested composition:
//!
//! ```text
//! log_time(report(fail_safe(classmethod(Apples::calculate_cost_impl))))
//!    |       |        |          └─ method as Invoke<Apples, (i32, f64)>, returns Result
//!    |       |        └─ Result -> Outcome; the containment boundary
//!    |       └─ one report line per call, pass-through
//!    └─ one timestamped line per call, pass-through
//! ```
//!
//! Side effects happen innermost first: in the chain above the report line is
//! always written before the log line. Only [`fail_safe`] changes the return
//! channel, and the outer decorators only accept links that already produce
//! an [`Outcome`](crate::Outcome), so an uncontained chain does not compile.
//!
//! # Examples
//!
//! ```
//! use method_rail::decorators::{classmethod, fail_safe, report_to, ReportFormat};
//! use method_rail::sink::MemorySink;
//! use method_rail::traits::Invoke;
//!
//! struct Counter { step: u32 }
//!
//! impl Counter {
//!     fn advance(&self, from: u32) -> Result<u32, String> {
//!         from.checked_add(self.step).ok_or_else(|| "overflow".to_string())
//!     }
//! }
//!
//! let sink = MemorySink::new();
//! let chain = report_to(fail_safe(classmethod(Counter::advance)), ReportFormat::default(), sink.clone());
//!
//! let counter = Counter { step: 2 };
//! assert_eq!(chain.invoke(&counter, (40,)).into_value(), 42);
//! assert!(chain.invoke(&counter, (u32::MAX,)).is_failure());
//! assert_eq!(sink.lines(), vec!["value: 42", "There was an error: overflow"]);
//! ```

pub mod class_method;
pub mod fail_safe;
pub mod log_time;
pub mod report;
pub mod with_context;

pub use class_method::{classmethod, ClassMethod};
pub use fail_safe::{fail_safe, FailSafe};
pub use log_time::{log_time, log_time_to, LogFormat, LogTime};
pub use report::{report, report_to, Report, ReportFormat};
pub use with_context::{with_context, WithContext};

//! Tower integration for method-rail.
//!
//! Every decorator is also a Tower [`Layer`], so a chain can be assembled with
//! [`tower::ServiceBuilder`]. Layers added first end up outermost, which
//! reads in the same order as the nested call form:
//!
//! ```text
//! log_time(report(fail_safe(classmethod(m))))
//! ServiceBuilder::new().layer(LogTimeLayer).layer(ReportLayer).layer(FailSafeLayer).service(classmethod(m))
//! ```
//!
//! Only [`Layer`] is used; the wrapped values are [`Invoke`](crate::traits::Invoke)
//! links, not Tower services.
//!
//! # Feature Flag
//!
//! Requires the `tower` feature:
//!
//! ```toml
//! [dependencies]
//! method-rail = { version = "0.1", features = ["tower"] }
//! ```
//!
//! # Example
//!
//! ```rust
//! use method_rail::decorators::classmethod;
//! use method_rail::sink::MemorySink;
//! use method_rail::tower::{FailSafeLayer, ReportLayer};
//! use method_rail::traits::Invoke;
//! use tower::ServiceBuilder;
//!
//! struct Doubler;
//!
//! impl Doubler {
//!     fn run(&self, x: i32) -> Result<i32, String> {
//!         Ok(x * 2)
//!     }
//! }
//!
//! let sink = MemorySink::new();
//! let chain = ServiceBuilder::new()
//!     .layer(ReportLayer::with_sink(sink.clone()))
//!     .layer(FailSafeLayer)
//!     .service(classmethod(Doubler::run));
//!
//! assert_eq!(chain.invoke(&Doubler, (21,)).into_value(), 42);
//! assert_eq!(sink.lines(), vec!["value: 42".to_string()]);
//! ```

use tower::Layer;

use crate::clock::SystemClock;
use crate::decorators::{FailSafe, LogFormat, LogTime, Report, ReportFormat, WithContext};
use crate::sink::StdoutSink;

/// A Tower [`Layer`] producing [`FailSafe`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FailSafeLayer;

impl<F> Layer<F> for FailSafeLayer {
    type Service = FailSafe<F>;

    #[inline]
    fn layer(&self, inner: F) -> Self::Service {
        FailSafe::new(inner)
    }
}

/// A Tower [`Layer`] producing [`Report`].
#[derive(Debug, Clone)]
pub struct ReportLayer<S = StdoutSink> {
    format: ReportFormat,
    sink: S,
}

impl ReportLayer {
    /// Default format, standard output.
    #[inline]
    pub fn new() -> Self {
        Self { format: ReportFormat::default(), sink: StdoutSink }
    }
}

impl Default for ReportLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> ReportLayer<S> {
    /// Default format, custom sink.
    #[inline]
    pub fn with_sink(sink: S) -> Self {
        Self { format: ReportFormat::default(), sink }
    }

    /// Replaces the format.
    #[inline]
    pub fn format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }
}

impl<F, S: Clone> Layer<F> for ReportLayer<S> {
    type Service = Report<F, S>;

    #[inline]
    fn layer(&self, inner: F) -> Self::Service {
        Report::new(inner, self.format.clone(), self.sink.clone())
    }
}

/// A Tower [`Layer`] producing [`LogTime`].
#[derive(Debug, Clone)]
pub struct LogTimeLayer<C = SystemClock, S = StdoutSink> {
    format: LogFormat,
    clock: C,
    sink: S,
}

impl LogTimeLayer {
    /// Default format, system clock, standard output.
    #[inline]
    pub fn new() -> Self {
        Self { format: LogFormat::default(), clock: SystemClock, sink: StdoutSink }
    }
}

impl Default for LogTimeLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, S> LogTimeLayer<C, S> {
    #[inline]
    pub fn with_parts(format: LogFormat, clock: C, sink: S) -> Self {
        Self { format, clock, sink }
    }

    /// Replaces the format.
    #[inline]
    pub fn format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }
}

impl<F, C: Clone, S: Clone> Layer<F> for LogTimeLayer<C, S> {
    type Service = LogTime<F, C, S>;

    #[inline]
    fn layer(&self, inner: F) -> Self::Service {
        LogTime::new(inner, self.format.clone(), self.clock.clone(), self.sink.clone())
    }
}

/// A Tower [`Layer`] producing [`WithContext`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextLayer {
    context: String,
}

impl ContextLayer {
    #[inline]
    pub fn new(context: impl Into<String>) -> Self {
        Self { context: context.into() }
    }

    #[inline]
    pub fn context(&self) -> &str {
        &self.context
    }
}

impl<F> Layer<F> for ContextLayer {
    type Service = WithContext<F>;

    #[inline]
    fn layer(&self, inner: F) -> Self::Service {
        WithContext::new(inner, self.context.clone())
    }
}

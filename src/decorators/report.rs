use core::fmt::Display;

use crate::sink::{LineSink, StdoutSink};
use crate::traits::Invoke;
use crate::types::Outcome;

/// Labels used by [`report`] when rendering its line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFormat {
    /// Prefix of a success line, followed by the value.
    pub success_label: String,
    /// Prefix of a failure line, followed by the failure.
    pub failure_label: String,
    /// Whether failure lines include the context chain or only the message.
    pub show_context: bool,
}

impl Default for ReportFormat {
    fn default() -> Self {
        Self {
            success_label: "value: ".into(),
            failure_label: "There was an error: ".into(),
            show_context: false,
        }
    }
}

impl ReportFormat {
    /// Default failure label with a custom success label.
    #[inline]
    pub fn labeled(success_label: impl Into<String>) -> Self {
        Self { success_label: success_label.into(), ..Default::default() }
    }

    /// Failure lines render the full `ctx -> message (code)` chain.
    #[inline]
    pub fn with_context_chain(mut self) -> Self {
        self.show_context = true;
        self
    }

    /// Renders the line for `outcome`.
    pub fn render<T: Display>(&self, outcome: &Outcome<T>) -> String {
        match outcome {
            Outcome::Success(value) => format!("{}{}", self.success_label, value),
            Outcome::Failure(failure) if self.show_context => {
                format!("{}{}", self.failure_label, failure.chain())
            },
            Outcome::Failure(failure) => format!("{}{}", self.failure_label, failure.message()),
        }
    }
}

/// Result reporting decorator produced by [`report`] and [`report_to`].
#[derive(Debug, Clone)]
pub struct Report<F, S = StdoutSink> {
    inner: F,
    format: ReportFormat,
    sink: S,
}

impl<F, S> Report<F, S> {
    #[inline]
    pub fn new(inner: F, format: ReportFormat, sink: S) -> Self {
        Self { inner, format, sink }
    }

    #[inline]
    pub const fn inner(&self) -> &F {
        &self.inner
    }

    #[inline]
    pub fn format(&self) -> &ReportFormat {
        &self.format
    }
}

/// Emits one line describing each outcome, then returns it unchanged.
///
/// Lines go to standard output using [`ReportFormat::default`].
#[inline]
pub fn report<F>(inner: F) -> Report<F> {
    Report::new(inner, ReportFormat::default(), StdoutSink)
}

/// [`report`] with an explicit format and sink.
///
/// # Examples
///
/// ```
/// use method_rail::decorators::{fail_safe, report_to, ReportFormat};
/// use method_rail::sink::MemorySink;
/// use method_rail::traits::Invoke;
///
/// let sink = MemorySink::new();
/// let priced = report_to(
///     fail_safe(|_: &(), (n,): (u32,)| Ok::<_, String>(n * 3)),
///     ReportFormat::labeled("Bag cost $"),
///     sink.clone(),
/// );
///
/// let outcome = priced.invoke(&(), (2,));
/// assert_eq!(outcome.into_value(), 6);
/// assert_eq!(sink.lines(), vec!["Bag cost $6".to_string()]);
/// ```
#[inline]
pub fn report_to<F, S>(inner: F, format: ReportFormat, sink: S) -> Report<F, S> {
    Report::new(inner, format, sink)
}

impl<O, Args, F, S, T> Invoke<O, Args> for Report<F, S>
where
    O: ?Sized,
    F: Invoke<O, Args, Output = Outcome<T>>,
    S: LineSink,
    T: Display,
{
    type Output = Outcome<T>;

    fn invoke(&self, receiver: &O, args: Args) -> Outcome<T> {
        let outcome = self.inner.invoke(receiver, args);
        self.sink.emit(&self.format.render(&outcome));
        outcome
    }
}

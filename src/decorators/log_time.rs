use chrono::{DateTime, Local, Utc};

use crate::clock::{Clock, SystemClock};
use crate::sink::{LineSink, StdoutSink};
use crate::traits::Invoke;
use crate::types::Outcome;

/// Rendering of the timestamped line emitted by [`log_time`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFormat {
    pub prefix: String,
    /// `chrono` strftime pattern.
    pub pattern: String,
    /// Render in UTC instead of the local time zone.
    pub utc: bool,
}

impl Default for LogFormat {
    fn default() -> Self {
        Self { prefix: "> Logged at ".into(), pattern: "%a %b %e %H:%M:%S %Y".into(), utc: false }
    }
}

impl LogFormat {
    /// RFC 3339 timestamps in UTC.
    #[inline]
    pub fn rfc3339() -> Self {
        Self { pattern: "%Y-%m-%dT%H:%M:%S%.3fZ".into(), utc: true, ..Default::default() }
    }

    /// Default pattern rendered in UTC.
    #[inline]
    pub fn utc() -> Self {
        Self { utc: true, ..Default::default() }
    }

    /// Renders the line for an instant.
    pub fn render(&self, at: DateTime<Utc>) -> String {
        let stamp = if self.utc {
            at.format(&self.pattern).to_string()
        } else {
            at.with_timezone(&Local).format(&self.pattern).to_string()
        };
        format!("{}{}", self.prefix, stamp)
    }
}

/// Timestamped logging decorator produced by [`log_time`] and [`log_time_to`].
#[derive(Debug, Clone)]
pub struct LogTime<F, C = SystemClock, S = StdoutSink> {
    inner: F,
    format: LogFormat,
    clock: C,
    sink: S,
}

impl<F, C, S> LogTime<F, C, S> {
    #[inline]
    pub fn new(inner: F, format: LogFormat, clock: C, sink: S) -> Self {
        Self { inner, format, clock, sink }
    }

    #[inline]
    pub const fn inner(&self) -> &F {
        &self.inner
    }

    #[inline]
    pub fn format(&self) -> &LogFormat {
        &self.format
    }
}

/// Emits one timestamped line per call, then returns the outcome unchanged.
///
/// The instant is read before `inner` runs; the line is written after it
/// returns. Lines go to standard output using [`LogFormat::default`].
#[inline]
pub fn log_time<F>(inner: F) -> LogTime<F> {
    LogTime::new(inner, LogFormat::default(), SystemClock, StdoutSink)
}

/// [`log_time`] with an explicit format, clock and sink.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use method_rail::clock::FixedClock;
/// use method_rail::decorators::{fail_safe, log_time_to, LogFormat};
/// use method_rail::sink::MemorySink;
/// use method_rail::traits::Invoke;
///
/// let sink = MemorySink::new();
/// let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap());
/// let logged = log_time_to(
///     fail_safe(|_: &(), (): ()| Ok::<_, String>("done")),
///     LogFormat::utc(),
///     clock,
///     sink.clone(),
/// );
///
/// assert!(logged.invoke(&(), ()).is_success());
/// assert_eq!(sink.lines(), vec!["> Logged at Fri Mar  1 09:30:00 2024".to_string()]);
/// ```
#[inline]
pub fn log_time_to<F, C, S>(inner: F, format: LogFormat, clock: C, sink: S) -> LogTime<F, C, S> {
    LogTime::new(inner, format, clock, sink)
}

impl<O, Args, F, C, S, T> Invoke<O, Args> for LogTime<F, C, S>
where
    O: ?Sized,
    F: Invoke<O, Args, Output = Outcome<T>>,
    C: Clock,
    S: LineSink,
{
    type Output = Outcome<T>;

    fn invoke(&self, receiver: &O, args: Args) -> Outcome<T> {
        let at = self.clock.now();
        let outcome = self.inner.invoke(receiver, args);
        self.sink.emit(&self.format.render(at));
        outcome
    }
}

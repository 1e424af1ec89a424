//! Destinations for report and log lines.
//!
//! [`report`](crate::decorators::report) and
//! [`log_time`](crate::decorators::log_time) emit exactly one line per call.
//! Where that line goes is decided by a [`LineSink`].
//!
//! # Examples
//!
//! ```
//! use method_rail::sink::{LineSink, MemorySink};
//!
//! let sink = MemorySink::new();
//! let handle = sink.clone();
//!
//! sink.emit("value: 42");
//! assert_eq!(handle.lines(), vec!["value: 42".to_string()]);
//! ```
use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

/// Receives fully rendered lines.
pub trait LineSink {
    fn emit(&self, line: &str);
}

impl<S: LineSink + ?Sized> LineSink for &S {
    #[inline]
    fn emit(&self, line: &str) {
        (**self).emit(line)
    }
}

impl<S: LineSink + ?Sized> LineSink for Rc<S> {
    #[inline]
    fn emit(&self, line: &str) {
        (**self).emit(line)
    }
}

/// Writes `line` and a newline, logging instead of panicking when the write fails.
fn write_line<W: Write + ?Sized>(out: &mut W, line: &str) {
    if let Err(error) = writeln!(out, "{}", line) {
        tracing::warn!(%error, line, "dropped output line");
    }
}

/// Prints each line to standard output.
///
/// A closed or broken stdout drops the line with a `WARN` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl LineSink for StdoutSink {
    fn emit(&self, line: &str) {
        write_line(&mut io::stdout().lock(), line);
    }
}

/// Writes each line to any [`Write`] destination, such as stderr or a file.
///
/// Write errors are logged at `WARN` and the line is dropped.
#[derive(Debug, Default)]
pub struct WriterSink<W> {
    out: RefCell<W>,
}

impl<W: Write> WriterSink<W> {
    #[inline]
    pub fn new(out: W) -> Self {
        Self { out: RefCell::new(out) }
    }

    /// Returns the underlying writer.
    #[inline]
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write> LineSink for WriterSink<W> {
    fn emit(&self, line: &str) {
        write_line(&mut *self.out.borrow_mut(), line);
    }
}

/// Forwards each line to `tracing` as an `INFO` event.
///
/// Report lines use the `method_rail::report` target, log lines the
/// `method_rail::log_time` target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TracingSink {
    target: TracingTarget,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TracingTarget {
    Report,
    LogTime,
}

impl TracingSink {
    /// Sink for [`report`](crate::decorators::report) lines.
    #[inline]
    pub const fn report() -> Self {
        Self { target: TracingTarget::Report }
    }

    /// Sink for [`log_time`](crate::decorators::log_time) lines.
    #[inline]
    pub const fn log_time() -> Self {
        Self { target: TracingTarget::LogTime }
    }
}

impl LineSink for TracingSink {
    fn emit(&self, line: &str) {
        // `target:` must be a constant, hence one macro call per target.
        match self.target {
            TracingTarget::Report => tracing::info!(target: "method_rail::report", "{}", line),
            TracingTarget::LogTime => tracing::info!(target: "method_rail::log_time", "{}", line),
        }
    }
}

/// Shared in-memory capture of emitted lines.
///
/// Clones share the same buffer, so one handle can be moved into a decorator
/// while another inspects what was written.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Rc<RefCell<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every line emitted so far, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.lines.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.borrow().is_empty()
    }

    /// Removes and returns every captured line.
    pub fn drain(&self) -> Vec<String> {
        core::mem::take(&mut *self.lines.borrow_mut())
    }
}

impl LineSink for MemorySink {
    fn emit(&self, line: &str) {
        self.lines.borrow_mut().push(line.to_owned());
    }
}

//! Failure payload carried by [`Outcome::Failure`](crate::types::Outcome::Failure).
//!
//! A [`Failure`] records what went wrong inside a decorated call: the
//! category of the abnormal termination, its description, and a stack of
//! context strings attached by outer layers.

use core::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::ErrorVec;

/// Message used when an abnormal termination carries no readable description.
pub const UNKNOWN_FAILURE: &str = "unknown failure";

/// Category of an abnormal termination contained by [`fail_safe`](crate::decorators::fail_safe).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The implementation rejected its input.
    Domain,
    /// A stream or I/O style failure with a retrievable description.
    Io,
    /// Anything else, including panics whose payload is not a string.
    Unknown,
}

impl Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain => f.write_str("domain"),
            Self::Io => f.write_str("io"),
            Self::Unknown => f.write_str("unknown"),
        }
    }
}

/// Description of a failed call, with optional context and code.
///
/// # Examples
///
/// ```
/// use method_rail::{Failure, FailureKind};
///
/// let failure = Failure::domain("must have 1 or more apples")
///     .with_context("calculate_cost")
///     .set_code(422);
///
/// assert_eq!(failure.kind(), FailureKind::Domain);
/// assert_eq!(failure.message(), "must have 1 or more apples");
/// assert_eq!(failure.to_string(), "calculate_cost -> must have 1 or more apples (code: 422)");
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub(crate) kind: FailureKind,
    pub(crate) message: String,
    pub(crate) context: ErrorVec<String>,
    pub(crate) code: Option<u32>,
}

impl Failure {
    /// Creates a failure of the given kind.
    #[inline]
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into(), context: ErrorVec::new(), code: None }
    }

    /// Creates a [`FailureKind::Domain`] failure.
    #[inline]
    pub fn domain(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Domain, message)
    }

    /// Creates a [`FailureKind::Io`] failure.
    #[inline]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Io, message)
    }

    /// Creates a [`FailureKind::Unknown`] failure with the fixed [`UNKNOWN_FAILURE`] message.
    #[inline]
    pub fn unknown() -> Self {
        Self::new(FailureKind::Unknown, UNKNOWN_FAILURE)
    }

    #[inline]
    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    /// The raised description, without context or code.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn code(&self) -> Option<u32> {
        self.code
    }

    /// Sets (or overrides) the failure code.
    #[inline]
    pub fn set_code(mut self, code: u32) -> Self {
        self.code = Some(code);
        self
    }

    /// Pushes a context entry.
    #[inline]
    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    /// Returns the context stack in LIFO order (most recent first).
    #[inline]
    pub fn context(&self) -> ErrorVec<String> {
        self.context.iter().rev().cloned().collect()
    }

    /// Iterates the context stack in LIFO order without cloning.
    #[inline]
    pub fn context_iter(&self) -> core::iter::Rev<core::slice::Iter<'_, String>> {
        self.context.iter().rev()
    }

    /// Renders `ctx_n -> ... -> ctx_1 -> message (code: c)`.
    #[must_use]
    pub fn chain(&self) -> String {
        let mut chain = String::with_capacity(self.message.len() + self.context.len() * 16);

        for ctx in self.context_iter() {
            chain.push_str(ctx);
            chain.push_str(" -> ");
        }
        chain.push_str(&self.message);

        if let Some(code) = self.code {
            chain.push_str(&format!(" (code: {})", code));
        }

        chain
    }
}

impl Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.chain())
    }
}

impl std::error::Error for Failure {}

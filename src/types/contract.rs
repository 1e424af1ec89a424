//! Programming errors raised by the binding machinery.
//!
//! A [`ContractViolation`] is never turned into an [`Outcome`](crate::Outcome):
//! it signals misuse by the integrator, not bad input. The panicking entry
//! points raise it as a typed panic payload, which
//! [`fail_safe`](crate::decorators::fail_safe) recognises and re-raises
//! instead of containing.

use core::any::Any;
use core::fmt::{self, Display};
use std::io::{self, Write};
use std::panic::Location;

/// Misuse of a slot or of an [`Outcome`](crate::Outcome).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractViolation {
    /// A [`MemberFn`](crate::MemberFn) was invoked before a callable was assigned.
    Unassigned,
    /// A [`MemberFn`](crate::MemberFn) was invoked after its owner was dropped.
    OwnerDropped,
    /// The value of a failed [`Outcome`](crate::Outcome) was read.
    ValueOnFailure { message: String },
}

impl ContractViolation {
    /// Raises `self` as a panic payload.
    ///
    /// The payload is not a string, so the default panic hook cannot print
    /// it; the [`diagnostic`](Self::diagnostic) line is written to stderr
    /// and logged at `ERROR` first. The payload can be recovered with
    /// [`ContractViolation::from_panic`].
    #[track_caller]
    pub fn raise(self) -> ! {
        let location = Location::caller();
        let diagnostic = self.diagnostic();
        tracing::error!(%location, "{}", diagnostic);
        let _ = writeln!(io::stderr().lock(), "{} at {}", diagnostic, location);
        std::panic::panic_any(self)
    }

    /// The line announcing this violation, e.g.
    /// `contract violation: member function invoked before a callable was assigned`.
    pub fn diagnostic(&self) -> String {
        format!("contract violation: {}", self)
    }

    /// Recovers a violation from a panic payload produced by [`raise`](Self::raise).
    pub fn from_panic(payload: &(dyn Any + Send)) -> Option<&Self> {
        payload.downcast_ref::<Self>()
    }
}

impl Display for ContractViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unassigned => f.write_str("member function invoked before a callable was assigned"),
            Self::OwnerDropped => f.write_str("member function invoked after its owner was dropped"),
            Self::ValueOnFailure { message } => {
                write!(f, "value read from a failed outcome: {}", message)
            },
        }
    }
}

impl std::error::Error for ContractViolation {}

//! Trait for converting error values into a [`Failure`].
//!
//! [`fail_safe`](crate::decorators::fail_safe) accepts any callable returning
//! `Result<T, E>` where `E: IntoFailure`. The conversion decides which
//! [`FailureKind`] the error belongs to.
//!
//! # Implementations
//!
//! - `String`, `&str`, `Cow<str>` - [`FailureKind::Domain`]
//! - `std::io::Error` - [`FailureKind::Io`]
//! - `Box<dyn Error + Send + Sync>` - [`FailureKind::Io`] when it wraps an
//!   `io::Error`, [`FailureKind::Domain`] otherwise
//! - `Failure` - identity
//!
//! # Examples
//!
//! ```
//! use method_rail::{traits::IntoFailure, FailureKind};
//!
//! let domain = "apples must weigh more than 0 ounces".into_failure();
//! assert_eq!(domain.kind(), FailureKind::Domain);
//!
//! let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "stream ended").into_failure();
//! assert_eq!(io.kind(), FailureKind::Io);
//! assert_eq!(io.message(), "stream ended");
//! ```
use std::borrow::Cow;
use std::error::Error;

use crate::types::{Failure, FailureKind};

/// Converts a type into a [`Failure`].
///
/// # Implementing for Custom Types
///
/// Types implementing `Display` can use
/// [`impl_into_failure!`](crate::impl_into_failure):
///
/// ```
/// use method_rail::{impl_into_failure, traits::IntoFailure, FailureKind};
/// use std::fmt;
///
/// #[derive(Debug)]
/// struct OutOfStock(u32);
///
/// impl fmt::Display for OutOfStock {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "only {} left", self.0)
///     }
/// }
///
/// impl_into_failure!(OutOfStock);
///
/// let failure = OutOfStock(2).into_failure();
/// assert_eq!(failure.kind(), FailureKind::Domain);
/// assert_eq!(failure.message(), "only 2 left");
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be converted into a `Failure`",
    label = "this type does not implement `IntoFailure`",
    note = "implement `IntoFailure` manually or use `impl_into_failure!({Self})` macro"
)]
pub trait IntoFailure {
    /// Converts `self` into a [`Failure`].
    fn into_failure(self) -> Failure;
}

impl IntoFailure for Failure {
    #[inline]
    fn into_failure(self) -> Failure {
        self
    }
}

impl IntoFailure for String {
    #[inline]
    fn into_failure(self) -> Failure {
        Failure::domain(self)
    }
}

impl IntoFailure for &str {
    #[inline]
    fn into_failure(self) -> Failure {
        Failure::domain(self)
    }
}

impl IntoFailure for Cow<'_, str> {
    #[inline]
    fn into_failure(self) -> Failure {
        Failure::domain(self.into_owned())
    }
}

impl IntoFailure for std::io::Error {
    #[inline]
    fn into_failure(self) -> Failure {
        Failure::io(self.to_string())
    }
}

impl IntoFailure for Box<dyn Error + Send + Sync> {
    fn into_failure(self) -> Failure {
        let kind = if self.is::<std::io::Error>() { FailureKind::Io } else { FailureKind::Domain };
        Failure::new(kind, self.to_string())
    }
}

impl IntoFailure for core::convert::Infallible {
    fn into_failure(self) -> Failure {
        match self {}
    }
}

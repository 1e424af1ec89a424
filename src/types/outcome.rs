use core::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::traits::IntoFailure;
use crate::types::{ContractViolation, Failure};

/// Tagged success/failure container returned by a decorated call chain.
///
/// `Outcome<T>` holds exactly one of a value or a [`Failure`]. There is no
/// implicit conversion to `T`: the value is extracted explicitly, and reading
/// it from a failure is a [`ContractViolation`] rather than a silent default.
///
/// # Type Parameters
///
/// * `T` - The success value type
///
/// # Variants
///
/// * `Success(T)` - The call completed normally
/// * `Failure(Failure)` - The call terminated abnormally and was contained
///
/// # Examples
///
/// ```
/// use method_rail::Outcome;
///
/// let ok = Outcome::success(18.203);
/// assert!(ok.is_success());
/// assert_eq!(*ok.value(), 18.203);
///
/// let bad: Outcome<f64> = Outcome::failure("must have 1 or more apples");
/// assert_eq!(bad.message(), Some("must have 1 or more apples"));
/// assert!(bad.try_value().is_err());
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Success(T),
    Failure(Failure),
}

impl<T> Outcome<T> {
    /// Creates a successful outcome.
    #[inline]
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a failed outcome from anything convertible into a [`Failure`].
    ///
    /// # Examples
    ///
    /// ```
    /// use method_rail::{FailureKind, Outcome};
    ///
    /// let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
    /// let outcome: Outcome<()> = Outcome::failure(io);
    /// assert_eq!(outcome.as_failure().unwrap().kind(), FailureKind::Io);
    /// ```
    #[inline]
    pub fn failure(failure: impl IntoFailure) -> Self {
        Self::Failure(failure.into_failure())
    }

    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns the failure, if any.
    #[must_use]
    #[inline]
    pub fn as_failure(&self) -> Option<&Failure> {
        match self {
            Self::Success(_) => None,
            Self::Failure(failure) => Some(failure),
        }
    }

    /// Returns the failure message, if any.
    #[must_use]
    #[inline]
    pub fn message(&self) -> Option<&str> {
        self.as_failure().map(Failure::message)
    }

    /// Borrows the success value.
    ///
    /// # Panics
    ///
    /// Raises [`ContractViolation::ValueOnFailure`] when called on a failure.
    #[track_caller]
    pub fn value(&self) -> &T {
        match self.try_value() {
            Ok(value) => value,
            Err(violation) => violation.raise(),
        }
    }

    /// Consumes the outcome and returns the success value.
    ///
    /// # Panics
    ///
    /// Raises [`ContractViolation::ValueOnFailure`] when called on a failure.
    #[track_caller]
    pub fn into_value(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(failure) => {
                ContractViolation::ValueOnFailure { message: failure.message }.raise()
            },
        }
    }

    /// Borrows the success value, reporting a violation instead of panicking.
    pub fn try_value(&self) -> Result<&T, ContractViolation> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(failure) => {
                Err(ContractViolation::ValueOnFailure { message: failure.message.clone() })
            },
        }
    }

    /// Converts into `Option<T>`, discarding the failure.
    #[inline]
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    #[inline]
    pub fn into_result(self) -> Result<T, Failure> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(failure) => Err(failure),
        }
    }

    #[inline]
    pub fn as_ref(&self) -> Outcome<&T> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(failure) => Outcome::Failure(failure.clone()),
        }
    }

    /// Maps the success value, leaving a failure untouched.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(failure) => Outcome::Failure(failure),
        }
    }

    /// Chains a computation that may itself fail.
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(failure) => Outcome::Failure(failure),
        }
    }

    /// Transforms the failure, leaving a success untouched.
    #[inline]
    pub fn map_failure<F>(self, f: F) -> Self
    where
        F: FnOnce(Failure) -> Failure,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(failure) => Self::Failure(f(failure)),
        }
    }

    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(&Failure) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(failure) => f(&failure),
        }
    }
}

impl<T: Display> Display for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(f, "{}", value),
            Self::Failure(failure) => write!(f, "error: {}", failure),
        }
    }
}

impl<T, E: IntoFailure> From<Result<T, E>> for Outcome<T> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error.into_failure()),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, Failure> {
    #[inline]
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}

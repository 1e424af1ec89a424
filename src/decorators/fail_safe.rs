use core::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::traits::{IntoFailure, Invoke};
use crate::types::{ContractViolation, Failure, Outcome};

/// Failure containment decorator produced by [`fail_safe`].
#[derive(Debug, Clone, Copy)]
pub struct FailSafe<F> {
    inner: F,
}

impl<F> FailSafe<F> {
    #[inline]
    pub const fn new(inner: F) -> Self {
        Self { inner }
    }

    #[inline]
    pub const fn inner(&self) -> &F {
        &self.inner
    }

    #[inline]
    pub fn into_inner(self) -> F {
        self.inner
    }
}

/// Converts every abnormal termination of `inner` into an [`Outcome::Failure`].
///
/// - `Ok(v)` becomes `Outcome::Success(v)`.
/// - `Err(e)` becomes `Outcome::Failure(e.into_failure())`; an
///   `std::io::Error` is classified as [`FailureKind::Io`](crate::FailureKind::Io).
/// - A panic carrying a `&str` or `String` becomes a
///   [`FailureKind::Domain`](crate::FailureKind::Domain) failure with that
///   message; any other payload becomes [`Failure::unknown`].
///
/// A panic carrying a [`ContractViolation`] is re-raised untouched.
///
/// # Panics
///
/// Containing a panic does not silence the process-wide panic hook: the
/// default hook still prints `thread '..' panicked at ..` to stderr before
/// the panic is turned into a [`Failure`]. Report expected validation
/// failures by returning `Err` and leave panics for bugs; install a custom
/// hook with [`std::panic::set_hook`] if contained panics must stay quiet.
///
/// This must be the innermost decorator: [`report`](crate::decorators::report)
/// and [`log_time`](crate::decorators::log_time) only accept callables that
/// already produce an [`Outcome`].
///
/// # Examples
///
/// ```
/// use method_rail::decorators::fail_safe;
/// use method_rail::traits::Invoke;
///
/// let checked = fail_safe(|_: &(), (count,): (i32,)| {
///     if count <= 0 {
///         return Err("must have 1 or more apples");
///     }
///     Ok(count * 2)
/// });
///
/// assert_eq!(checked.invoke(&(), (4,)).into_value(), 8);
/// assert_eq!(checked.invoke(&(), (0,)).message(), Some("must have 1 or more apples"));
/// ```
#[inline]
pub fn fail_safe<F>(inner: F) -> FailSafe<F> {
    FailSafe::new(inner)
}

impl<O, Args, F, T, E> Invoke<O, Args> for FailSafe<F>
where
    O: ?Sized,
    F: Invoke<O, Args, Output = Result<T, E>>,
    E: IntoFailure,
{
    type Output = Outcome<T>;

    fn invoke(&self, receiver: &O, args: Args) -> Outcome<T> {
        match panic::catch_unwind(AssertUnwindSafe(|| self.inner.invoke(receiver, args))) {
            Ok(Ok(value)) => Outcome::Success(value),
            Ok(Err(error)) => {
                let failure = error.into_failure();
                tracing::debug!(kind = %failure.kind(), reason = failure.message(), "contained failure");
                Outcome::Failure(failure)
            },
            Err(payload) => {
                let failure = failure_from_panic(payload);
                tracing::debug!(kind = %failure.kind(), reason = failure.message(), "contained panic");
                Outcome::Failure(failure)
            },
        }
    }
}

/// Classifies a panic payload, re-raising contract violations.
fn failure_from_panic(payload: Box<dyn Any + Send>) -> Failure {
    if ContractViolation::from_panic(payload.as_ref()).is_some() {
        panic::resume_unwind(payload);
    }

    match payload.downcast::<String>() {
        Ok(message) => Failure::domain(*message),
        Err(payload) => match payload.downcast_ref::<&'static str>() {
            Some(message) => Failure::domain(*message),
            None => Failure::unknown(),
        },
    }
}

//! Declarative helpers.
//!
//! - [`macro@crate::enable_member_fn`] - Adopts [`EnableMemberFn`](crate::EnableMemberFn)
//!   for an owner and optionally declares its slot alias.
//! - [`macro@crate::impl_into_failure`] - Implements
//!   [`IntoFailure`](crate::traits::IntoFailure) for a `Display` type.

/// Implements [`EnableMemberFn`](crate::EnableMemberFn) for an owner type.
///
/// The `as` form additionally declares a slot alias, so that
/// `enable_member_fn!(pub Apples as ApplesFn)` lets fields be written as
/// `ApplesFn<fn(i32, f64) -> Outcome<f64>>` instead of
/// `MemberFn<Apples, fn(i32, f64) -> Outcome<f64>>`.
///
/// # Examples
///
/// ```
/// use method_rail::{enable_member_fn, MemberFn, Outcome};
///
/// struct Ledger;
/// enable_member_fn!(pub Ledger as LedgerFn);
///
/// fn assert_same<T>(_: Option<T>, _: Option<T>) {}
/// assert_same(
///     None::<LedgerFn<fn(u64) -> Outcome<u64>>>,
///     None::<MemberFn<Ledger, fn(u64) -> Outcome<u64>>>,
/// );
/// ```
#[macro_export]
macro_rules! enable_member_fn {
    ($vis:vis $owner:ident as $alias:ident) => {
        impl $crate::EnableMemberFn for $owner {}

        #[allow(dead_code)]
        $vis type $alias<S> = $crate::MemberFn<$owner, S>;
    };
    ($owner:ty) => {
        impl $crate::EnableMemberFn for $owner {}
    };
}

/// Implements [`IntoFailure`](crate::traits::IntoFailure) for a custom type.
///
/// The failure message is the type's `Display` output. The kind defaults to
/// [`FailureKind::Domain`](crate::FailureKind::Domain); pass another variant
/// after `=>` to override it.
///
/// # Examples
///
/// ```
/// use method_rail::{impl_into_failure, traits::IntoFailure, FailureKind};
/// use std::fmt;
///
/// struct Disconnected;
///
/// impl fmt::Display for Disconnected {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         f.write_str("peer disconnected")
///     }
/// }
///
/// impl_into_failure!(Disconnected => Io);
///
/// let failure = Disconnected.into_failure();
/// assert_eq!(failure.kind(), FailureKind::Io);
/// assert_eq!(failure.message(), "peer disconnected");
/// ```
#[macro_export]
macro_rules! impl_into_failure {
    ($type:ty) => {
        $crate::impl_into_failure!($type => Domain);
    };
    ($type:ty => $kind:ident) => {
        impl $crate::traits::IntoFailure for $type {
            fn into_failure(self) -> $crate::Failure {
                $crate::Failure::new($crate::FailureKind::$kind, self.to_string())
            }
        }
    };
}

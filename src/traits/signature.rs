//! Compile-time extraction of a function shape.
//!
//! A [`Signature`] is the fn-pointer type naming a slot's shape, e.g.
//! `fn(i32, f64) -> Outcome<f64>`. It is never instantiated; it only
//! parameterises [`MemberFn`](crate::MemberFn) so that the return type and
//! the ordered argument list do not have to be restated by hand.
//!
//! # Examples
//!
//! ```
//! use method_rail::traits::{ArgsOf, OutputOf, Signature};
//!
//! type Shape = fn(i32, f64) -> String;
//!
//! let args: ArgsOf<Shape> = (5, 3.34);
//! let out: OutputOf<Shape> = String::from("ok");
//!
//! assert_eq!(<Shape as Signature>::ARITY, 2);
//! assert_eq!(args, (5, 3.34));
//! assert_eq!(out, "ok");
//! ```
//!
//! Argument types must be nameable without higher-ranked lifetimes: owned
//! values or `'static` references.

/// Return type and ordered argument list of a function shape.
pub trait Signature {
    /// The declared return type.
    type Output;
    /// The argument types as a tuple, in declaration order.
    type Args;
    /// Number of arguments.
    const ARITY: usize;
}

/// Return type of a [`Signature`].
pub type OutputOf<S> = <S as Signature>::Output;

/// Argument tuple of a [`Signature`].
pub type ArgsOf<S> = <S as Signature>::Args;

macro_rules! count {
    () => { 0usize };
    ($head:ident $($tail:ident)*) => { 1usize + count!($($tail)*) };
}

macro_rules! impl_signature {
    ($($arg:ident),*) => {
        impl<R, $($arg),*> Signature for fn($($arg),*) -> R {
            type Output = R;
            type Args = ($($arg,)*);
            const ARITY: usize = count!($($arg)*);
        }
    };
}

impl_signature!();
impl_signature!(A1);
impl_signature!(A1, A2);
impl_signature!(A1, A2, A3);
impl_signature!(A1, A2, A3, A4);
impl_signature!(A1, A2, A3, A4, A5);
impl_signature!(A1, A2, A3, A4, A5, A6);
impl_signature!(A1, A2, A3, A4, A5, A6, A7);
impl_signature!(A1, A2, A3, A4, A5, A6, A7, A8);

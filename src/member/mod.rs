//! Bound member slots.
//!
//! A [`MemberFn<O, S>`] is a field of `O` that behaves like a method: it
//! holds a non-owning back-reference to its owner plus a reassignable
//! callable of shape `S`, and supplies the owner automatically when called.
//!
//! Owners are built with [`Rc::new_cyclic`] (see
//! [`EnableMemberFn::new_bound`]) so that each slot can capture the owner's
//! [`Weak`] handle during construction.
//!
//! # Examples
//!
//! ```
//! use std::rc::Rc;
//! use method_rail::{MemberFn, Outcome};
//! use method_rail::decorators::{classmethod, fail_safe};
//!
//! struct Greeter {
//!     name: String,
//!     greet: MemberFn<Greeter, fn(u8) -> Outcome<String>>,
//! }
//!
//! impl Greeter {
//!     fn new(name: &str) -> Rc<Self> {
//!         Rc::new_cyclic(|me| Greeter {
//!             name: name.to_string(),
//!             greet: MemberFn::new(me.clone()).with(fail_safe(classmethod(Self::greet_impl))),
//!         })
//!     }
//!
//!     fn greet_impl(&self, times: u8) -> Result<String, &'static str> {
//!         if times == 0 {
//!             return Err("nothing to say");
//!         }
//!         Ok(format!("hello {}", self.name).repeat(times as usize))
//!     }
//! }
//!
//! let greeter = Greeter::new("rail");
//! assert_eq!(greeter.greet.call(1).into_value(), "hello rail");
//! assert_eq!(greeter.greet.call(0).message(), Some("nothing to say"));
//! ```

use core::fmt;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::traits::{Invoke, Signature};
use crate::types::ContractViolation;

pub mod enable;

pub use enable::EnableMemberFn;

type Callable<O, S> =
    Rc<dyn Invoke<O, <S as Signature>::Args, Output = <S as Signature>::Output>>;

/// Reassignable, self-binding member function slot.
///
/// # Type Parameters
///
/// * `O` - The owning type, passed to the stored callable as `&O`
/// * `S` - The slot's shape as a fn-pointer type, e.g. `fn(i32, f64) -> Outcome<f64>`
///
/// # Preconditions
///
/// Calling the slot requires that a callable has been assigned and that the
/// owner is still alive. Violations raise a [`ContractViolation`] panic
/// (`Unassigned` or `OwnerDropped`); the `try_*` forms return it instead.
///
/// The slot is neither `Send` nor `Sync`.
pub struct MemberFn<O, S: Signature> {
    owner: Weak<O>,
    callable: RefCell<Option<Callable<O, S>>>,
}

impl<O, S: Signature> MemberFn<O, S> {
    /// Creates an unassigned slot bound to `owner`.
    #[inline]
    pub fn new(owner: Weak<O>) -> Self {
        Self { owner, callable: RefCell::new(None) }
    }

    /// Creates an unassigned slot bound to the owner behind `owner`.
    #[inline]
    pub fn bound(owner: &Weak<O>) -> Self {
        Self::new(owner.clone())
    }

    /// Assigns `callable` and returns the slot; the constructor-friendly form of [`assign`](Self::assign).
    #[inline]
    pub fn with<F>(self, callable: F) -> Self
    where
        F: Invoke<O, S::Args, Output = S::Output> + 'static,
    {
        self.assign(callable);
        self
    }

    /// Replaces the stored callable.
    ///
    /// The callable's shape must match `S` exactly; a mismatch does not compile.
    pub fn assign<F>(&self, callable: F)
    where
        F: Invoke<O, S::Args, Output = S::Output> + 'static,
    {
        let replaced = self.callable.replace(Some(Rc::new(callable))).is_some();
        tracing::trace!(replaced, arity = S::ARITY, "member function assigned");
    }

    #[inline]
    pub fn is_assigned(&self) -> bool {
        self.callable.borrow().is_some()
    }

    /// Returns the owner, or `None` once it has been dropped.
    #[inline]
    pub fn owner(&self) -> Option<Rc<O>> {
        self.owner.upgrade()
    }

    /// Calls the slot with an argument tuple.
    ///
    /// # Panics
    ///
    /// Raises [`ContractViolation::Unassigned`] or
    /// [`ContractViolation::OwnerDropped`] when the preconditions do not hold.
    #[track_caller]
    pub fn call_with(&self, args: S::Args) -> S::Output {
        match self.try_call_with(args) {
            Ok(output) => output,
            Err(violation) => violation.raise(),
        }
    }

    /// Calls the slot with an argument tuple, reporting precondition violations.
    pub fn try_call_with(&self, args: S::Args) -> Result<S::Output, ContractViolation> {
        let owner = self.owner.upgrade().ok_or(ContractViolation::OwnerDropped)?;
        // Cloned out so the callable may reassign this slot while it runs.
        let callable = self.callable.borrow().clone().ok_or(ContractViolation::Unassigned)?;
        Ok(callable.invoke(&*owner, args))
    }
}

impl<O, S: Signature> Clone for MemberFn<O, S> {
    /// Copies the back-reference and the current callable; the copy stays bound to the same owner.
    fn clone(&self) -> Self {
        Self { owner: self.owner.clone(), callable: RefCell::new(self.callable.borrow().clone()) }
    }
}

impl<O, S: Signature> fmt::Debug for MemberFn<O, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemberFn")
            .field("arity", &S::ARITY)
            .field("assigned", &self.is_assigned())
            .field("owner_alive", &(self.owner.strong_count() > 0))
            .finish()
    }
}

macro_rules! impl_call {
    ($($arg:ident),*) => {
        impl<O, R, $($arg),*> MemberFn<O, fn($($arg),*) -> R> {
            /// Calls the slot with its domain arguments; the owner is supplied automatically.
            ///
            /// # Panics
            ///
            /// Raises a [`ContractViolation`] when the slot is unassigned or its owner is gone.
            #[inline]
            #[track_caller]
            #[allow(non_snake_case)]
            pub fn call(&self, $($arg: $arg),*) -> R {
                self.call_with(($($arg,)*))
            }

            /// [`call`](Self::call) returning precondition violations instead of panicking.
            #[inline]
            #[allow(non_snake_case)]
            pub fn try_call(&self, $($arg: $arg),*) -> Result<R, ContractViolation> {
                self.try_call_with(($($arg,)*))
            }
        }
    };
}

impl_call!();
impl_call!(A1);
impl_call!(A1, A2);
impl_call!(A1, A2, A3);
impl_call!(A1, A2, A3, A4);
impl_call!(A1, A2, A3, A4, A5);
impl_call!(A1, A2, A3, A4, A5, A6);
impl_call!(A1, A2, A3, A4, A5, A6, A7);
impl_call!(A1, A2, A3, A4, A5, A6, A7, A8);

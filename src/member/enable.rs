use std::rc::{Rc, Weak};

use crate::member::MemberFn;
use crate::traits::Signature;

/// Shorthand for owners that declare [`MemberFn`] fields.
///
/// Implement it with [`enable_member_fn!`](crate::enable_member_fn), which
/// can also declare a per-owner slot alias so fields only state their shape.
///
/// # Examples
///
/// ```
/// use std::rc::Rc;
/// use method_rail::{enable_member_fn, EnableMemberFn, Outcome};
/// use method_rail::decorators::{classmethod, fail_safe};
///
/// struct Thermostat {
///     offset: f64,
///     adjust: ThermostatFn<fn(f64) -> Outcome<f64>>,
/// }
///
/// enable_member_fn!(Thermostat as ThermostatFn);
///
/// impl Thermostat {
///     fn new(offset: f64) -> Rc<Self> {
///         Self::new_bound(|me| Thermostat {
///             offset,
///             adjust: Self::member_fn(me).with(fail_safe(classmethod(Self::adjust_impl))),
///         })
///     }
///
///     fn adjust_impl(&self, reading: f64) -> Result<f64, String> {
///         if reading.is_nan() {
///             return Err("reading is not a number".into());
///         }
///         Ok(reading + self.offset)
///     }
/// }
///
/// let thermostat = Thermostat::new(0.5);
/// assert_eq!(thermostat.adjust.call(20.0).into_value(), 20.5);
/// ```
pub trait EnableMemberFn: Sized {
    /// Builds `Self` behind an [`Rc`], handing `build` the weak handle slots bind to.
    ///
    /// The handle cannot be upgraded until `build` returns, so slots must not
    /// be called from inside `build`.
    #[inline]
    fn new_bound<F>(build: F) -> Rc<Self>
    where
        F: FnOnce(&Weak<Self>) -> Self,
    {
        Rc::new_cyclic(build)
    }

    /// Creates an unassigned slot of shape `S` bound to `owner`.
    #[inline]
    fn member_fn<S: Signature>(owner: &Weak<Self>) -> MemberFn<Self, S> {
        MemberFn::bound(owner)
    }
}

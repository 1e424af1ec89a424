//! The uniform callable shape shared by every decorator.
//!
//! Every link of a decorator chain is an [`Invoke<O, Args>`]: it receives the
//! receiver by reference and the domain arguments as one tuple. Decorators
//! never look at the receiver; they pass it through to the callable they
//! wrap, which makes them usable with any receiver type.
//!
//! Closures of the form `Fn(&O, Args) -> R` implement the trait directly:
//!
//! ```
//! use method_rail::traits::Invoke;
//!
//! struct Basket { unit_price: f64 }
//!
//! let cost = |basket: &Basket, (count,): (u32,)| f64::from(count) * basket.unit_price;
//! let basket = Basket { unit_price: 0.5 };
//!
//! assert_eq!(cost.invoke(&basket, (4,)), 2.0);
//! ```

/// A callable taking a receiver and a tuple of arguments.
///
/// # Type Parameters
///
/// * `O` - The receiver type
/// * `Args` - The argument tuple, e.g. `(i32, f64)`
pub trait Invoke<O: ?Sized, Args> {
    /// What the call produces.
    type Output;

    /// Calls `self` on `receiver` with `args`.
    fn invoke(&self, receiver: &O, args: Args) -> Self::Output;
}

impl<O, Args, R, F> Invoke<O, Args> for F
where
    O: ?Sized,
    F: Fn(&O, Args) -> R,
{
    type Output = R;

    #[inline]
    fn invoke(&self, receiver: &O, args: Args) -> R {
        self(receiver, args)
    }
}

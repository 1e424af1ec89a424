use crate::traits::Invoke;
use crate::types::Outcome;

/// Context annotation decorator produced by [`with_context`].
#[derive(Debug, Clone)]
pub struct WithContext<F> {
    inner: F,
    context: String,
}

impl<F> WithContext<F> {
    #[inline]
    pub fn new(inner: F, context: impl Into<String>) -> Self {
        Self { inner, context: context.into() }
    }

    #[inline]
    pub fn context(&self) -> &str {
        &self.context
    }

    #[inline]
    pub const fn inner(&self) -> &F {
        &self.inner
    }
}

/// Pushes `context` onto the context stack of every failure; successes pass through.
///
/// # Examples
///
/// ```
/// use method_rail::decorators::{fail_safe, with_context};
/// use method_rail::traits::Invoke;
///
/// let named = with_context(
///     fail_safe(|_: &(), (): ()| Err::<(), _>("out of stock")),
///     "calculate_cost",
/// );
///
/// let failure = named.invoke(&(), ()).as_failure().cloned().unwrap();
/// assert_eq!(failure.message(), "out of stock");
/// assert_eq!(failure.chain(), "calculate_cost -> out of stock");
/// ```
#[inline]
pub fn with_context<F>(inner: F, context: impl Into<String>) -> WithContext<F> {
    WithContext::new(inner, context)
}

impl<O, Args, F, T> Invoke<O, Args> for WithContext<F>
where
    O: ?Sized,
    F: Invoke<O, Args, Output = Outcome<T>>,
{
    type Output = Outcome<T>;

    fn invoke(&self, receiver: &O, args: Args) -> Outcome<T> {
        self.inner
            .invoke(receiver, args)
            .map_failure(|failure| failure.with_context(self.context.as_str()))
    }
}

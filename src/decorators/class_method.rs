use crate::traits::Invoke;

/// Receiver adapter produced by [`classmethod`].
///
/// Wraps a method path such as `Apples::calculate_cost_impl` (a
/// `fn(&Apples, i32, f64) -> R`) and exposes it with the uniform
/// [`Invoke<Apples, (i32, f64)>`](Invoke) shape the decorators compose over.
#[derive(Debug, Clone, Copy)]
pub struct ClassMethod<M> {
    method: M,
}

impl<M> ClassMethod<M> {
    #[inline]
    pub const fn new(method: M) -> Self {
        Self { method }
    }

    /// Consumes the adapter and returns the wrapped method.
    #[inline]
    pub fn into_inner(self) -> M {
        self.method
    }
}

/// Turns a method taking `&self` plus `n` arguments into a chain link.
///
/// # Examples
///
/// ```
/// use method_rail::decorators::classmethod;
/// use method_rail::traits::Invoke;
///
/// struct Scale { factor: i64 }
///
/// impl Scale {
///     fn apply(&self, a: i64, b: i64) -> i64 {
///         (a + b) * self.factor
///     }
/// }
///
/// let link = classmethod(Scale::apply);
/// assert_eq!(link.invoke(&Scale { factor: 3 }, (1, 2)), 9);
/// ```
#[inline]
pub fn classmethod<M>(method: M) -> ClassMethod<M> {
    ClassMethod::new(method)
}

macro_rules! impl_class_method {
    ($($arg:ident),*) => {
        impl<O, M, R, $($arg),*> Invoke<O, ($($arg,)*)> for ClassMethod<M>
        where
            O: ?Sized,
            M: Fn(&O, $($arg),*) -> R,
        {
            type Output = R;

            #[inline]
            #[allow(non_snake_case)]
            fn invoke(&self, receiver: &O, ($($arg,)*): ($($arg,)*)) -> R {
                (self.method)(receiver, $($arg),*)
            }
        }
    };
}

impl_class_method!();
impl_class_method!(A1);
impl_class_method!(A1, A2);
impl_class_method!(A1, A2, A3);
impl_class_method!(A1, A2, A3, A4);
impl_class_method!(A1, A2, A3, A4, A5);
impl_class_method!(A1, A2, A3, A4, A5, A6);
impl_class_method!(A1, A2, A3, A4, A5, A6, A7);
impl_class_method!(A1, A2, A3, A4, A5, A6, A7, A8);

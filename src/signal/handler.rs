/// A callable that can be bound to a `Signal<Args>` without a receiver.
///
/// Implemented for every `Fn(A1, ..., An) -> Out` whose parameters match the
/// tuple `Args`, for `n` in `0..=12`. `Out` is whatever the callable returns;
/// the signal discards it.
///
/// Closures passed through this trait directly (as with
/// `Signal::connect_handler`) need their parameter types spelled out
/// (`|n: i32| ...`). `Signal::connect_fn` does not.
pub trait Handler<Args, Out>: Send + Sync + 'static {
    /// Invoke the handler with an unpacked argument tuple.
    fn call(&self, args: Args);
}

/// A callable taking a receiver `&R` followed by the signal's arguments.
///
/// Method paths such as `Consumer::on_number_changed` implement this when
/// their parameter list after `&self` matches `Args`. Receivers are only
/// ever borrowed shared, so `&mut self` methods cannot be bound.
pub trait Method<R, Args, Out>: Send + Sync + 'static {
    /// Invoke the method on `receiver` with an unpacked argument tuple.
    fn call(&self, receiver: &R, args: Args);
}

macro_rules! impl_callables {
    ($($ty:ident),*) => {
        impl<F, Out, $($ty,)*> Handler<($($ty,)*), Out> for F
        where
            F: Fn($($ty),*) -> Out + Send + Sync + 'static,
        {
            #[allow(non_snake_case)]
            fn call(&self, ($($ty,)*): ($($ty,)*)) {
                (self)($($ty),*);
            }
        }

        impl<F, R, Out, $($ty,)*> Method<R, ($($ty,)*), Out> for F
        where
            F: Fn(&R, $($ty),*) -> Out + Send + Sync + 'static,
        {
            #[allow(non_snake_case)]
            fn call(&self, receiver: &R, ($($ty,)*): ($($ty,)*)) {
                (self)(receiver, $($ty),*);
            }
        }
    };
}

impl_callables!();
impl_callables!(A1);
impl_callables!(A1, A2);
impl_callables!(A1, A2, A3);
impl_callables!(A1, A2, A3, A4);
impl_callables!(A1, A2, A3, A4, A5);
impl_callables!(A1, A2, A3, A4, A5, A6);
impl_callables!(A1, A2, A3, A4, A5, A6, A7);
impl_callables!(A1, A2, A3, A4, A5, A6, A7, A8);
impl_callables!(A1, A2, A3, A4, A5, A6, A7, A8, A9);
impl_callables!(A1, A2, A3, A4, A5, A6, A7, A8, A9, A10);
impl_callables!(A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11);
impl_callables!(A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11, A12);

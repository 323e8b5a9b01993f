use crate::error::SignalError;
use crate::signal::handler::{Handler, Method};
use std::any::type_name;
use std::fmt;
use std::sync::Arc;

/// Whether a stored slot actually reached its receiver.
enum Delivery {
    Delivered,
    ReceiverDropped,
}

type Slot<Args> = Box<dyn Fn(Args) -> Delivery + Send + Sync>;

/// A signal holding at most one connected receiver.
///
/// `Args` is the tuple of argument types passed on every emission: `()`,
/// `(A,)`, `(A, B)` and so on up to twelve elements. Connecting replaces any
/// previous binding; there is no fan-out and no disconnect.
///
/// # Examples
///
/// ```
/// use sigback::Signal;
/// use std::sync::{Arc, Mutex};
///
/// struct Consumer {
///     seen: Mutex<Vec<i32>>,
/// }
///
/// impl Consumer {
///     fn on_number_changed(&self, number: i32) {
///         self.seen.lock().unwrap().push(number);
///     }
/// }
///
/// let consumer = Arc::new(Consumer { seen: Mutex::new(Vec::new()) });
/// let mut signal: Signal<(i32,)> = Signal::new();
///
/// signal.emit(1); // nothing connected yet
/// signal.connect(Consumer::on_number_changed, &consumer);
/// signal.emit(10);
/// signal.emit(11);
///
/// assert_eq!(*consumer.seen.lock().unwrap(), vec![10, 11]);
/// ```
pub struct Signal<Args> {
    slot: Option<Slot<Args>>,
}

impl<Args> Signal<Args> {
    /// Create a signal with nothing connected.
    pub fn new() -> Self {
        Self { slot: None }
    }

    /// Whether anything has been connected to this signal.
    ///
    /// Stays `true` after the receiver of a [`connect`](Self::connect)
    /// binding is dropped.
    pub fn is_connected(&self) -> bool {
        self.slot.is_some()
    }

    /// Emit with the whole argument tuple.
    ///
    /// Same as the per-arity `emit`, usable from code generic over `Args`.
    pub fn emit_tuple(&self, args: Args) {
        match self.try_emit(args) {
            Ok(()) | Err(SignalError::Unbound) => {}
            Err(err) => log::debug!("Signal<{}> emission skipped: {}", type_name::<Args>(), err),
        }
    }

    /// Emit and report whether a receiver was invoked.
    ///
    /// Returns [`SignalError::Unbound`] when nothing is connected and
    /// [`SignalError::ReceiverDropped`] when the connected receiver no longer
    /// exists. Panics from the receiver propagate unchanged.
    pub fn try_emit(&self, args: Args) -> Result<(), SignalError> {
        let slot = self.slot.as_ref().ok_or(SignalError::Unbound)?;
        match slot(args) {
            Delivery::Delivered => Ok(()),
            Delivery::ReceiverDropped => Err(SignalError::ReceiverDropped),
        }
    }
}

impl<Args: 'static> Signal<Args> {
    /// Connect `method` on `receiver`, replacing any previous binding.
    ///
    /// The signal only keeps a weak reference: once every `Arc` to the
    /// receiver is gone, emissions are skipped.
    ///
    /// `method` is called with `&R`, never `&mut R`. A receiver that changes
    /// state when notified keeps that state behind a `Mutex`, an atomic or
    /// another interior-mutability type:
    ///
    /// ```
    /// use sigback::Signal;
    /// use std::sync::atomic::{AtomicI32, Ordering};
    /// use std::sync::Arc;
    ///
    /// #[derive(Default)]
    /// struct Thermostat {
    ///     last_reading: AtomicI32,
    /// }
    ///
    /// impl Thermostat {
    ///     fn on_reading(&self, celsius: i32) {
    ///         self.last_reading.store(celsius, Ordering::SeqCst);
    ///     }
    /// }
    ///
    /// let thermostat = Arc::new(Thermostat::default());
    /// let mut reading: Signal<(i32,)> = Signal::new();
    /// reading.connect(Thermostat::on_reading, &thermostat);
    /// reading.emit(21);
    ///
    /// assert_eq!(thermostat.last_reading.load(Ordering::SeqCst), 21);
    /// ```
    pub fn connect<R, M, Out>(&mut self, method: M, receiver: &Arc<R>)
    where
        R: Send + Sync + 'static,
        M: Method<R, Args, Out>,
    {
        let receiver = Arc::downgrade(receiver);
        self.bind(Box::new(move |args: Args| match receiver.upgrade() {
            Some(receiver) => {
                method.call(&receiver, args);
                Delivery::Delivered
            }
            None => Delivery::ReceiverDropped,
        }));
    }

    /// Connect any [`Handler`] for these arguments, replacing any previous
    /// binding.
    ///
    /// Meant for code generic over `Args`. With a concrete signal type, the
    /// per-arity `connect_fn` lets closure parameter types be inferred.
    pub fn connect_handler<H, Out>(&mut self, handler: H)
    where
        H: Handler<Args, Out>,
    {
        self.bind(Box::new(move |args: Args| {
            handler.call(args);
            Delivery::Delivered
        }));
    }

    fn bind(&mut self, slot: Slot<Args>) {
        if self.slot.replace(slot).is_some() {
            log::trace!("Signal<{}> rebound, previous binding replaced", type_name::<Args>());
        } else {
            log::trace!("Signal<{}> connected", type_name::<Args>());
        }
    }
}

impl<Args> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args> fmt::Debug for Signal<Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("args", &type_name::<Args>())
            .field("connected", &self.is_connected())
            .finish()
    }
}

macro_rules! impl_arity {
    ($($arg:ident: $ty:ident),*) => {
        impl<$($ty,)*> Signal<($($ty,)*)> {
            /// Invoke the connected receiver with these arguments, if any.
            ///
            /// A no-op when nothing is connected or the receiver was dropped.
            pub fn emit(&self, $($arg: $ty),*) {
                self.emit_tuple(($($arg,)*));
            }
        }

        impl<$($ty: 'static,)*> Signal<($($ty,)*)> {
            /// Connect a plain callable, replacing any previous binding.
            ///
            /// Closure parameter types are taken from the signal, so
            /// `|n| ...` needs no annotation.
            pub fn connect_fn<F, Out>(&mut self, handler: F)
            where
                F: Fn($($ty),*) -> Out + Send + Sync + 'static,
            {
                self.connect_handler::<F, Out>(handler);
            }
        }
    };
}

impl_arity!();
impl_arity!(a1: A1);
impl_arity!(a1: A1, a2: A2);
impl_arity!(a1: A1, a2: A2, a3: A3);
impl_arity!(a1: A1, a2: A2, a3: A3, a4: A4);
impl_arity!(a1: A1, a2: A2, a3: A3, a4: A4, a5: A5);
impl_arity!(a1: A1, a2: A2, a3: A3, a4: A4, a5: A5, a6: A6);
impl_arity!(a1: A1, a2: A2, a3: A3, a4: A4, a5: A5, a6: A6, a7: A7);
impl_arity!(a1: A1, a2: A2, a3: A3, a4: A4, a5: A5, a6: A6, a7: A7, a8: A8);
impl_arity!(a1: A1, a2: A2, a3: A3, a4: A4, a5: A5, a6: A6, a7: A7, a8: A8, a9: A9);
impl_arity!(a1: A1, a2: A2, a3: A3, a4: A4, a5: A5, a6: A6, a7: A7, a8: A8, a9: A9, a10: A10);
impl_arity!(
    a1: A1, a2: A2, a3: A3, a4: A4, a5: A5, a6: A6, a7: A7, a8: A8, a9: A9, a10: A10, a11: A11
);
impl_arity!(
    a1: A1, a2: A2, a3: A3, a4: A4, a5: A5, a6: A6, a7: A7, a8: A8, a9: A9, a10: A10, a11: A11,
    a12: A12
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        seen: Mutex<Vec<i32>>,
    }

    impl Recorder {
        fn record(&self, value: i32) {
            self.seen.lock().unwrap().push(value);
        }

        fn values(&self) -> Vec<i32> {
            self.seen.lock().unwrap().clone()
        }
    }

    #[test]
    fn unbound_emit_is_noop() {
        let signal: Signal<(i32,)> = Signal::new();
        assert!(!signal.is_connected());
        signal.emit(5);
        assert_eq!(signal.try_emit((5,)), Err(SignalError::Unbound));
    }

    #[test]
    fn connected_emit_invokes_once_per_call() {
        let recorder = Arc::new(Recorder::default());
        let mut signal: Signal<(i32,)> = Signal::new();
        signal.connect(Recorder::record, &recorder);

        signal.emit(10);
        signal.emit(11);
        signal.emit(12);

        assert!(signal.is_connected());
        assert_eq!(recorder.values(), vec![10, 11, 12]);
    }

    #[test]
    fn rebinding_replaces_previous_receiver() {
        let first = Arc::new(Recorder::default());
        let second = Arc::new(Recorder::default());
        let mut signal: Signal<(i32,)> = Signal::new();

        signal.connect(Recorder::record, &first);
        signal.emit(1);
        signal.connect(Recorder::record, &second);
        signal.emit(2);

        assert_eq!(first.values(), vec![1]);
        assert_eq!(second.values(), vec![2]);
    }

    #[test]
    fn connect_does_not_keep_receiver_alive() {
        let recorder = Arc::new(Recorder::default());
        let mut signal: Signal<(i32,)> = Signal::new();
        signal.connect(Recorder::record, &recorder);
        assert_eq!(Arc::strong_count(&recorder), 1);

        drop(recorder);
        signal.emit(3);
        assert_eq!(signal.try_emit((3,)), Err(SignalError::ReceiverDropped));
        assert!(signal.is_connected());
    }

    #[test]
    fn zero_argument_signal() {
        let counter = Arc::new(AtomicUsize::new(0));
        let counter_clone = counter.clone();
        let mut signal: Signal<()> = Signal::default();

        signal.connect_fn(move || {
            counter_clone.fetch_add(1, Ordering::SeqCst);
        });
        signal.emit();
        signal.emit();

        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn connect_fn_infers_closure_arguments() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = seen.clone();
        let mut signal: Signal<(i32, String)> = Signal::new();

        signal.connect_fn(move |id, label| {
            seen_clone.lock().unwrap().push(format!("{}:{}", id, label));
        });
        signal.emit(7, "seven".to_string());

        assert_eq!(*seen.lock().unwrap(), vec!["7:seven".to_string()]);
    }

    #[test]
    fn connect_handler_from_generic_code() {
        fn bind_counter<Args: 'static, H: Handler<Args, ()>>(signal: &mut Signal<Args>, handler: H) {
            signal.connect_handler(handler);
        }

        let counter = Arc::new(AtomicUsize::new(0));
        let counter_clone = counter.clone();
        let mut signal: Signal<(u8, u8)> = Signal::new();

        bind_counter(&mut signal, move |a: u8, b: u8| {
            counter_clone.fetch_add(usize::from(a + b), Ordering::SeqCst);
        });
        signal.emit(2, 3);

        assert_eq!(counter.load(Ordering::SeqCst), 5);
    }

    #[test]
    fn debug_shows_connection_state() {
        let mut signal: Signal<(u8,)> = Signal::new();
        assert!(format!("{:?}", signal).contains("connected: false"));
        signal.connect_fn(|_: u8| {});
        assert!(format!("{:?}", signal).contains("connected: true"));
    }
}

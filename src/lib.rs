//! # Sigback
//!
//! A minimal signal/slot library for Rust.
//!
//! A producer owns one or more [`Signal`]s as fields and calls `emit` when
//! something happens. A consumer exposes plain methods; setup code binds one
//! of them to a signal with [`Signal::connect`]. Emission is synchronous, on
//! the calling thread, and reaches at most one receiver:
//! - Connecting again replaces the previous binding
//! - Emitting with nothing connected does nothing
//! - The signal holds its receiver weakly and never keeps it alive
//!
//! Argument lists are checked at compile time: a `Signal<(i32, String)>`
//! only accepts methods taking `(&self, i32, String)`.
//!
//! ```
//! use sigback::Signal;
//! use std::sync::Arc;
//!
//! struct Producer {
//!     number_changed: Signal<(i32,)>,
//! }
//!
//! struct Consumer;
//!
//! impl Consumer {
//!     fn on_number_changed(&self, number: i32) {
//!         println!("Number changed to {}", number);
//!     }
//! }
//!
//! let consumer = Arc::new(Consumer);
//! let mut producer = Producer { number_changed: Signal::new() };
//! producer.number_changed.connect(Consumer::on_number_changed, &consumer);
//! producer.number_changed.emit(10);
//! ```

pub mod error;
pub mod signal;

// Re-export main types for convenience
pub use error::SignalError;
pub use signal::{Handler, Method, Signal};

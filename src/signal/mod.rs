//! Single-slot signals.
//!
//! This module provides the emitter and the callable traits it binds:
//! - Signal: holds at most one receiver and invokes it on emit
//! - Handler: plain callables matching the signal's arguments
//! - Method: receiver methods matching the signal's arguments

mod handler;
mod signal;

pub use handler::{Handler, Method};
pub use signal::Signal;

//! Producer/consumer example
//!
//! Run with `RUST_LOG=trace` to see the signal's own log output.

use std::sync::Arc;
use sigback::Signal;

struct Producer {
    // Emitted whenever the producer's number changes
    number_changed: Signal<(i32,)>,
}

impl Producer {
    fn new() -> Self {
        Self {
            number_changed: Signal::new(),
        }
    }

    fn do_something_that_can_emit(&self, value: i32) {
        self.number_changed.emit(value);
    }
}

struct Consumer;

impl Consumer {
    fn on_number_changed(&self, number: i32) {
        println!("Number changed to {}", number);
    }
}

fn main() {
    env_logger::init();

    let mut producer = Producer::new();
    let consumer = Arc::new(Consumer);

    // Connect the consumer's method to the producer's signal
    producer
        .number_changed
        .connect(Consumer::on_number_changed, &consumer);

    producer.do_something_that_can_emit(10);
    producer.do_something_that_can_emit(11);
    producer.do_something_that_can_emit(12);
}

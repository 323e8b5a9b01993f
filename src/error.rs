use thiserror::Error;

/// Reasons a checked emission did not reach a receiver.
///
/// Only [`Signal::try_emit`](crate::Signal::try_emit) reports these;
/// plain `emit` treats both cases as a no-op.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SignalError {
    #[error("no receiver is connected to the signal")]
    Unbound,

    #[error("the connected receiver has been dropped")]
    ReceiverDropped,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(
            SignalError::Unbound.to_string(),
            "no receiver is connected to the signal"
        );
        assert_eq!(
            SignalError::ReceiverDropped.to_string(),
            "the connected receiver has been dropped"
        );
    }
}

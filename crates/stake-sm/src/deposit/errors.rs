//! Errors related to the state transitions in the Deposit State Machine.

use liquidstake_primitives::deposit::DepositState;
use thiserror::Error;

/// Errors that can occur in the Deposit State Machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DSMError {
    /// An invalid event was received for the current state.
    #[error("Received invalid event {event} in state {state}; reason: {reason:?}")]
    InvalidEvent {
        /// The state in which the event was received.
        state: String,
        /// The invalid event that was received.
        event: String,
        /// The reason for the invalidity.
        reason: Option<String>, // sometimes the reason is obvious from context or unknown
    },

    /// An event was rejected in the current state.
    ///
    /// This happens when the event is valid for the state but its payload is not.
    #[error("Event rejected in state: {state}, reason: {reason}")]
    Rejected {
        /// The state in which the event was rejected.
        state: DepositState,
        /// The reason for the rejection.
        reason: String, // rejection reason is a must
    },
}

/// The result type for operations in the Deposit State Machine.
pub type DSMResult<T> = Result<T, DSMError>;

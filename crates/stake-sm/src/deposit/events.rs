//! The events that are relevant to the Deposit State Machine.

use liquidstake_primitives::types::PacketSequence;

/// The external events that affect the Deposit State Machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DepositEvent {
    /// The transfer of the deposit to its host chain has been dispatched.
    TransferDispatched {
        /// The channel the transfer was sent over.
        channel_id: String,
        /// The sequence number of the transfer packet.
        sequence: PacketSequence,
    },

    /// The transfer has been acknowledged by the host chain.
    TransferAcknowledged,

    /// The delegation of the deposit's funds has been dispatched.
    DelegationDispatched {
        /// The channel the delegation transaction was sent over.
        channel_id: String,
        /// The sequence number of the delegation packet.
        sequence: PacketSequence,
    },

    /// The delegation has been acknowledged by the host chain.
    DelegationAcknowledged,

    /// The last packet dispatched for this deposit failed or timed out.
    Failed,
}

impl std::fmt::Display for DepositEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DepositEvent::TransferDispatched {
                channel_id,
                sequence,
            } => write!(f, "TransferDispatched on {channel_id} with sequence {sequence}"),
            DepositEvent::TransferAcknowledged => write!(f, "TransferAcknowledged"),
            DepositEvent::DelegationDispatched {
                channel_id,
                sequence,
            } => write!(f, "DelegationDispatched on {channel_id} with sequence {sequence}"),
            DepositEvent::DelegationAcknowledged => write!(f, "DelegationAcknowledged"),
            DepositEvent::Failed => write!(f, "Failed"),
        }
    }
}

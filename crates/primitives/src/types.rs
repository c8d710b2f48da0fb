//! Type aliases used across the workspace.

/// A logical round number, scoped per chain.
pub type Epoch = u64;

/// The identifier of a chain, e.g. `cosmoshub-4`.
pub type ChainId = String;

/// The sequence number of an IBC packet as assigned by the sending channel end.
pub type PacketSequence = u64;

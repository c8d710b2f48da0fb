//! Errors raised by the storage layer.

use liquidstake_primitives::types::ChainId;
use thiserror::Error;

/// Error while reading from or writing to the store.
#[derive(Debug, Error)]
pub enum DbError {
    /// The persistent backend failed.
    #[error("backend: {0}")]
    Backend(#[from] sled::Error),

    /// A record could not be encoded or decoded.
    #[error("codec: {0}")]
    Codec(#[from] std::io::Error),

    /// A key could not be built from its components.
    #[error("malformed key: {0}")]
    MalformedKey(String),

    /// Summing the amounts of a chain's deposits left the representable range.
    #[error("deposit amounts of {chain_id} overflow")]
    AmountOverflow {
        /// The chain whose deposits were being summed.
        chain_id: ChainId,
    },
}

/// Result alias for storage operations.
pub type DbResult<T> = Result<T, DbError>;

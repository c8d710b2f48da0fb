//! Errors raised by the engine.

use liquidstake_db::errors::DbError;
use liquidstake_params::errors::ParamsError;
use liquidstake_primitives::{errors::CoinError, types::ChainId};
use liquidstake_sm::deposit::errors::DSMError;
use thiserror::Error;

/// Error while executing an engine operation.
///
/// Any error aborts the enclosing unit of work; none of its writes, events or samples survive.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The store failed.
    #[error("db: {0}")]
    Db(#[from] DbError),

    /// A deposit refused a lifecycle event.
    #[error("deposit state machine: {0}")]
    StateMachine(#[from] DSMError),

    /// The stored parameters are unusable.
    #[error("invalid params: {0}")]
    Params(#[from] ParamsError),

    /// A record or remote object does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The light client behind a connection cannot tell which chain it tracks.
    #[error(
        "unexpected type of client, cannot determine chain-id: clientType: {client_type}, connectionid: {connection_id}"
    )]
    UnexpectedClientType {
        /// The type of the client.
        client_type: String,
        /// The connection the client was looked up for.
        connection_id: String,
    },

    /// A cross-chain transaction could not be dispatched.
    #[error("could not send ICA transfer for host chain {chain_id}")]
    Dispatch {
        /// The host chain the transaction was destined for.
        chain_id: ChainId,
        /// The underlying failure.
        #[source]
        source: anyhow::Error,
    },

    /// An amount in one denomination was applied to a record in another.
    #[error("denomination mismatch: expected {expected}, got {got}")]
    DenomMismatch {
        /// The denomination of the record.
        expected: String,
        /// The denomination supplied.
        got: String,
    },

    /// Arithmetic on amounts failed.
    #[error("coin: {0}")]
    Coin(#[from] CoinError),

    /// An amount left the representable range.
    #[error("amount overflow")]
    AmountOverflow,

    /// An address is malformed.
    #[error("invalid address: {0:?}")]
    InvalidAddress(String),

    /// An external collaborator failed.
    #[error("collaborator: {0}")]
    Collaborator(#[from] anyhow::Error),
}

/// Result alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

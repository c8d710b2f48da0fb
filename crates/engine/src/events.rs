//! Events emitted by engine operations.

use std::fmt::Display;

use liquidstake_primitives::{dec::Dec, types::ChainId};

/// An event emitted by a successful unit of work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A host chain was disabled because its exchange rate left the allowed band.
    ChainDisabled {
        /// The disabled chain.
        chain_id: ChainId,
        /// The exchange rate that triggered the disablement.
        c_value: Dec,
    },
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Event::ChainDisabled { chain_id, c_value } => {
                write!(f, "chain_disabled(chain_id={chain_id}, c_value={c_value})")
            }
        }
    }
}

//! Row spec for host chains.

use liquidstake_primitives::{host_chain::HostChain, types::ChainId};

use super::{
    kv::{KVRowSpec, PackableKey},
    HOST_CHAIN_PREFIX,
};
use crate::errors::DbResult;

/// Key for a host-chain row: its chain id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostChainKey {
    /// The chain id.
    pub chain_id: ChainId,
}

impl HostChainKey {
    /// Returns the prefix shared by every host chain.
    pub fn table_prefix() -> Vec<u8> {
        vec![HOST_CHAIN_PREFIX]
    }
}

impl PackableKey for HostChainKey {
    fn pack(&self) -> DbResult<Vec<u8>> {
        let mut key = Self::table_prefix();
        key.extend_from_slice(self.chain_id.as_bytes());

        Ok(key)
    }
}

/// ZST for the host-chain row spec.
#[derive(Debug)]
pub struct HostChainRowSpec;

impl KVRowSpec for HostChainRowSpec {
    type Key = HostChainKey;
    type Value = HostChain;
}

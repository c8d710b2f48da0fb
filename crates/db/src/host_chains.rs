//! The host-chain store.

use liquidstake_primitives::host_chain::HostChain;
use tracing::trace;

use crate::{
    errors::DbResult,
    kv::{KvRead, KvWrite, RowRead, RowWrite},
    row_spec::host_chains::{HostChainKey, HostChainRowSpec},
};

/// Read access to host chains.
pub trait HostChainReader: KvRead {
    /// Returns the host chain registered under `chain_id`, if any.
    fn host_chain(&self, chain_id: &str) -> DbResult<Option<HostChain>> {
        let key = HostChainKey {
            chain_id: chain_id.to_string(),
        };

        self.get_row::<HostChainRowSpec>(&key)
    }

    /// Returns every registered host chain, ordered by chain id.
    fn all_host_chains(&self) -> DbResult<Vec<HostChain>> {
        self.scan_rows::<HostChainRowSpec>(&HostChainKey::table_prefix())
    }
}

impl<T: KvRead + ?Sized> HostChainReader for T {}

/// Write access to host chains.
pub trait HostChainWriter: KvWrite {
    /// Inserts or replaces the host chain keyed by its chain id.
    fn set_host_chain(&mut self, host_chain: &HostChain) -> DbResult<()> {
        trace!(chain_id = %host_chain.chain_id, c_value = %host_chain.c_value, active = host_chain.active, "storing host chain");

        let key = HostChainKey {
            chain_id: host_chain.chain_id.clone(),
        };

        self.put_row::<HostChainRowSpec>(&key, host_chain)
    }
}

impl<T: KvWrite + ?Sized> HostChainWriter for T {}

//! The `sled`-backed store.

use sled::{Batch, Db, Tree};
use tracing::{debug, info};

use super::config::{SledConfig, DEFAULT_TREE_NAME};
use crate::{
    errors::DbResult,
    kv::{KvPair, KvRead, KvStore, WriteBatch},
};

/// A durable store on a single `sled` tree.
///
/// Batches are applied with [`Tree::apply_batch`], which is atomic.
#[derive(Debug, Clone)]
pub struct SledStore {
    db: Db,
    tree: Tree,
    flush_on_commit: bool,
}

impl SledStore {
    /// Opens, or creates, the store described by `config`.
    pub fn open(config: &SledConfig) -> DbResult<Self> {
        let db = sled::Config::new().path(config.path()).open()?;
        let tree = db.open_tree(config.tree_name())?;

        info!(path = %config.path().display(), tree = config.tree_name(), "opened sled store");

        Ok(Self {
            db,
            tree,
            flush_on_commit: config.flush_on_commit(),
        })
    }

    /// Opens a store that is deleted when dropped.
    pub fn temporary() -> DbResult<Self> {
        let db = sled::Config::new().temporary(true).open()?;
        let tree = db.open_tree(DEFAULT_TREE_NAME)?;

        Ok(Self {
            db,
            tree,
            flush_on_commit: false,
        })
    }

    /// Blocks until every applied batch is durable on disk.
    pub fn flush(&self) -> DbResult<()> {
        let bytes = self.db.flush()?;
        debug!(%bytes, "flushed sled store");

        Ok(())
    }
}

impl KvRead for SledStore {
    fn get(&self, key: &[u8]) -> DbResult<Option<Vec<u8>>> {
        Ok(self.tree.get(key)?.map(|value| value.to_vec()))
    }

    fn scan_prefix(&self, prefix: &[u8]) -> DbResult<Vec<KvPair>> {
        self.tree
            .scan_prefix(prefix)
            .map(|entry| {
                let (key, value) = entry?;
                Ok((key.to_vec(), value.to_vec()))
            })
            .collect()
    }
}

impl KvStore for SledStore {
    fn commit(&mut self, batch: WriteBatch) -> DbResult<()> {
        let ops = batch.len();
        let mut sled_batch = Batch::default();

        for (key, op) in batch {
            match op {
                Some(value) => sled_batch.insert(key, value),
                None => sled_batch.remove(key),
            }
        }

        self.tree.apply_batch(sled_batch)?;
        debug!(%ops, "committed batch");

        if self.flush_on_commit {
            self.flush()?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use liquidstake_primitives::deposit::DepositState;
    use liquidstake_test_utils::fixtures::{deposit, host_chain};

    use super::*;
    use crate::{
        cache::CacheStore,
        deposits::{DepositReader, DepositWriter},
        host_chains::{HostChainReader, HostChainWriter},
        kv::KvWrite,
    };

    #[test]
    fn test_store_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let config = SledConfig::new(dir.path()).with_flush_on_commit(true);
        let hc = host_chain("cosmoshub-4");
        let d = deposit(&hc, 3, 500, DepositState::Pending);

        {
            let mut store = SledStore::open(&config).unwrap();
            let batch = {
                let mut cache = CacheStore::new(&store);
                cache.set_host_chain(&hc).unwrap();
                cache.set_deposit(&d).unwrap();
                cache.into_batch()
            };
            store.commit(batch).unwrap();
        }

        let store = SledStore::open(&config).unwrap();
        assert_eq!(store.host_chain("cosmoshub-4").unwrap(), Some(hc));
        assert_eq!(store.all_deposits().unwrap(), vec![d]);
    }

    #[test]
    fn test_commit_applies_removals() {
        let mut store = SledStore::temporary().unwrap();
        let hc = host_chain("cosmoshub-4");
        let d = deposit(&hc, 1, 7, DepositState::Sent);

        let mut batch = WriteBatch::new();
        batch.put(b"k".to_vec(), b"v".to_vec());
        store.commit(batch).unwrap();

        let batch = {
            let mut cache = CacheStore::new(&store);
            cache.set_deposit(&d).unwrap();
            cache.remove(b"k".to_vec());
            cache.into_batch()
        };
        store.commit(batch).unwrap();

        assert_eq!(store.get(b"k").unwrap(), None);
        assert_eq!(
            store.deposit_for_chain_and_epoch("cosmoshub-4", 1).unwrap(),
            Some(d)
        );
    }
}

//! In-memory backend.

use std::collections::BTreeMap;

use crate::{
    errors::DbResult,
    kv::{KvPair, KvRead, KvStore, KvWrite, WriteBatch},
};

/// An ordered in-memory store.
///
/// Also implements [`KvWrite`] so that fixtures can be seeded directly without going through a
/// unit of work.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemStore {
    entries: BTreeMap<Vec<u8>, Vec<u8>>,
}

impl MemStore {
    /// Returns the number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KvRead for MemStore {
    fn get(&self, key: &[u8]) -> DbResult<Option<Vec<u8>>> {
        Ok(self.entries.get(key).cloned())
    }

    fn scan_prefix(&self, prefix: &[u8]) -> DbResult<Vec<KvPair>> {
        Ok(self
            .entries
            .range(prefix.to_vec()..)
            .take_while(|(key, _)| key.starts_with(prefix))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect())
    }
}

impl KvWrite for MemStore {
    fn put(&mut self, key: Vec<u8>, value: Vec<u8>) {
        self.entries.insert(key, value);
    }

    fn remove(&mut self, key: Vec<u8>) {
        self.entries.remove(&key);
    }
}

impl KvStore for MemStore {
    fn commit(&mut self, batch: WriteBatch) -> DbResult<()> {
        for (key, op) in batch {
            match op {
                Some(value) => self.put(key, value),
                None => self.remove(key),
            }
        }

        Ok(())
    }
}

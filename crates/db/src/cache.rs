//! A write-buffering overlay used to stage the writes of one unit of work.

use std::{collections::BTreeMap, fmt};

use tracing::trace;

use crate::{
    errors::DbResult,
    kv::{KvPair, KvRead, KvWrite, WriteBatch},
};

/// Buffers writes on top of a read-only parent.
///
/// Reads observe the buffered writes. Nothing reaches the parent until the caller commits the
/// result of [`CacheStore::into_batch`]; dropping the overlay discards every write.
pub struct CacheStore<'a> {
    parent: &'a dyn KvRead,
    writes: WriteBatch,
}

impl<'a> CacheStore<'a> {
    /// Creates an empty overlay over `parent`.
    pub fn new(parent: &'a dyn KvRead) -> Self {
        Self {
            parent,
            writes: WriteBatch::new(),
        }
    }

    /// Returns the number of buffered writes.
    pub fn pending_writes(&self) -> usize {
        self.writes.len()
    }

    /// Consumes the overlay, returning the buffered writes.
    pub fn into_batch(self) -> WriteBatch {
        self.writes
    }
}

impl fmt::Debug for CacheStore<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheStore")
            .field("pending_writes", &self.writes.len())
            .finish_non_exhaustive()
    }
}

impl KvRead for CacheStore<'_> {
    fn get(&self, key: &[u8]) -> DbResult<Option<Vec<u8>>> {
        match self.writes.get(key) {
            Some(op) => Ok(op.map(<[u8]>::to_vec)),
            None => self.parent.get(key),
        }
    }

    fn scan_prefix(&self, prefix: &[u8]) -> DbResult<Vec<KvPair>> {
        let mut merged: BTreeMap<Vec<u8>, Vec<u8>> =
            self.parent.scan_prefix(prefix)?.into_iter().collect();

        for (key, op) in self.writes.scan_prefix(prefix) {
            match op {
                Some(value) => {
                    merged.insert(key.clone(), value.clone());
                }
                None => {
                    merged.remove(key);
                }
            }
        }

        Ok(merged.into_iter().collect())
    }
}

impl KvWrite for CacheStore<'_> {
    fn put(&mut self, key: Vec<u8>, value: Vec<u8>) {
        trace!(key = %hex::encode(&key), "buffering put");
        self.writes.put(key, value);
    }

    fn remove(&mut self, key: Vec<u8>) {
        trace!(key = %hex::encode(&key), "buffering remove");
        self.writes.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inmemory::MemStore;

    fn seeded() -> MemStore {
        let mut store = MemStore::default();
        store.put(vec![1, 1], b"a".to_vec());
        store.put(vec![1, 2], b"b".to_vec());
        store.put(vec![2, 1], b"c".to_vec());

        store
    }

    #[test]
    fn test_reads_observe_buffered_writes() {
        let store = seeded();
        let mut cache = CacheStore::new(&store);

        cache.put(vec![1, 3], b"d".to_vec());
        cache.remove(vec![1, 1]);
        cache.put(vec![1, 2], b"B".to_vec());

        assert_eq!(cache.get(&[1, 1]).unwrap(), None);
        assert_eq!(cache.get(&[1, 2]).unwrap(), Some(b"B".to_vec()));
        assert_eq!(cache.get(&[2, 1]).unwrap(), Some(b"c".to_vec()));

        let scanned = cache.scan_prefix(&[1]).unwrap();
        assert_eq!(
            scanned,
            vec![(vec![1, 2], b"B".to_vec()), (vec![1, 3], b"d".to_vec())]
        );

        // the parent is untouched until commit
        assert_eq!(store.get(&[1, 1]).unwrap(), Some(b"a".to_vec()));
    }

    #[test]
    fn test_commit_applies_batch() {
        let mut store = seeded();

        let batch = {
            let mut cache = CacheStore::new(&store);
            cache.remove(vec![2, 1]);
            cache.put(vec![3], b"e".to_vec());
            assert_eq!(cache.pending_writes(), 2);

            cache.into_batch()
        };

        crate::kv::KvStore::commit(&mut store, batch).unwrap();

        assert_eq!(store.get(&[2, 1]).unwrap(), None);
        assert_eq!(store.get(&[3]).unwrap(), Some(b"e".to_vec()));
    }
}

//! The ordered key-value abstraction every store is built on.

use std::collections::{btree_map, BTreeMap};

use crate::{
    errors::DbResult,
    row_spec::kv::{KVRowSpec, PackableKey, SerializableValue},
};

/// A key-value pair as returned by scans.
pub type KvPair = (Vec<u8>, Vec<u8>);

/// Read access to an ordered key space.
pub trait KvRead {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &[u8]) -> DbResult<Option<Vec<u8>>>;

    /// Returns every pair whose key starts with `prefix`, in ascending key order.
    fn scan_prefix(&self, prefix: &[u8]) -> DbResult<Vec<KvPair>>;
}

/// Write access to an ordered key space.
///
/// Writes are buffered or applied in place depending on the implementor; either way they are
/// visible to subsequent reads through the same handle.
pub trait KvWrite: KvRead {
    /// Stores `value` under `key`, replacing any previous value.
    fn put(&mut self, key: Vec<u8>, value: Vec<u8>);

    /// Removes `key`. Removing an absent key is a no-op.
    fn remove(&mut self, key: Vec<u8>);
}

/// A backing store that applies a [`WriteBatch`] atomically.
pub trait KvStore: KvRead {
    /// Applies every operation in `batch`, or none of them.
    fn commit(&mut self, batch: WriteBatch) -> DbResult<()>;
}

/// An ordered set of pending writes.
///
/// `None` marks a removal. Later operations on the same key replace earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteBatch {
    ops: BTreeMap<Vec<u8>, Option<Vec<u8>>>,
}

impl WriteBatch {
    /// Creates an empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an insertion.
    pub fn put(&mut self, key: Vec<u8>, value: Vec<u8>) {
        self.ops.insert(key, Some(value));
    }

    /// Records a removal.
    pub fn remove(&mut self, key: Vec<u8>) {
        self.ops.insert(key, None);
    }

    /// Returns the pending operation on `key`: `Some(None)` for a removal, `None` if untouched.
    pub fn get(&self, key: &[u8]) -> Option<Option<&[u8]>> {
        self.ops.get(key).map(|op| op.as_deref())
    }

    /// Iterates over the pending operations on keys starting with `prefix`, in key order.
    pub fn scan_prefix<'a>(
        &'a self,
        prefix: &'a [u8],
    ) -> impl Iterator<Item = (&'a Vec<u8>, &'a Option<Vec<u8>>)> + 'a {
        self.ops
            .range(prefix.to_vec()..)
            .take_while(move |(key, _)| key.starts_with(prefix))
    }

    /// Returns the number of pending operations.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Returns `true` if there are no pending operations.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

impl IntoIterator for WriteBatch {
    type Item = (Vec<u8>, Option<Vec<u8>>);
    type IntoIter = btree_map::IntoIter<Vec<u8>, Option<Vec<u8>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.into_iter()
    }
}

/// Typed reads over any [`KvRead`].
pub trait RowRead: KvRead {
    /// Reads and decodes the row stored under `key`.
    fn get_row<R: KVRowSpec>(&self, key: &R::Key) -> DbResult<Option<R::Value>> {
        self.get(&key.pack()?)?
            .map(|bytes| R::Value::deserialize(&bytes))
            .transpose()
    }

    /// Reads and decodes every row of `R` whose key starts with `prefix`, in key order.
    fn scan_rows<R: KVRowSpec>(&self, prefix: &[u8]) -> DbResult<Vec<R::Value>> {
        self.scan_prefix(prefix)?
            .into_iter()
            .map(|(_, bytes)| R::Value::deserialize(&bytes))
            .collect()
    }
}

impl<T: KvRead + ?Sized> RowRead for T {}

/// Typed writes over any [`KvWrite`].
pub trait RowWrite: KvWrite {
    /// Encodes `value` and stores it under `key`.
    fn put_row<R: KVRowSpec>(&mut self, key: &R::Key, value: &R::Value) -> DbResult<()> {
        let key = key.pack()?;
        let value = value.serialize()?;
        self.put(key, value);

        Ok(())
    }

    /// Removes the row stored under `key`.
    fn delete_row<R: KVRowSpec>(&mut self, key: &R::Key) -> DbResult<()> {
        let key = key.pack()?;
        self.remove(key);

        Ok(())
    }
}

impl<T: KvWrite + ?Sized> RowWrite for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_last_write_wins() {
        let mut batch = WriteBatch::new();
        batch.put(b"a".to_vec(), b"1".to_vec());
        batch.remove(b"a".to_vec());
        batch.put(b"b".to_vec(), b"2".to_vec());
        batch.put(b"b".to_vec(), b"3".to_vec());

        assert_eq!(batch.len(), 2);
        assert_eq!(batch.get(b"a"), Some(None));
        assert_eq!(batch.get(b"b"), Some(Some(&b"3"[..])));
        assert_eq!(batch.get(b"c"), None);
    }

    #[test]
    fn test_batch_prefix_scan() {
        let mut batch = WriteBatch::new();
        batch.put(vec![1, 2], vec![]);
        batch.put(vec![1, 3], vec![]);
        batch.put(vec![2, 0], vec![]);
        batch.put(vec![0, 9], vec![]);

        let keys: Vec<_> = batch.scan_prefix(&[1]).map(|(k, _)| k.clone()).collect();
        assert_eq!(keys, vec![vec![1, 2], vec![1, 3]]);
    }
}

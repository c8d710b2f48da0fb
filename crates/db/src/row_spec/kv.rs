//! Type specifications for key-value pairs stored in the ordered key space.

use borsh::{BorshDeserialize, BorshSerialize};

use crate::errors::DbResult;

/// Type specification for a KV pair.
pub trait KVRowSpec {
    /// Type of the key.
    type Key: PackableKey;
    /// Type of the value.
    type Value: SerializableValue;
}

/// A key that can be packed into bytes whose lexicographic order is the order in which rows are
/// scanned.
pub trait PackableKey: Sized {
    /// Packs the key into bytes, including its record prefix.
    fn pack(&self) -> DbResult<Vec<u8>>;
}

/// A value that can be serialized and deserialized into bytes.
pub trait SerializableValue: Sized {
    /// Serializes self to bytes.
    fn serialize(&self) -> DbResult<Vec<u8>>;

    /// Deserializes self from bytes.
    fn deserialize(bytes: &[u8]) -> DbResult<Self>;
}

impl<T: BorshSerialize + BorshDeserialize> SerializableValue for T {
    fn serialize(&self) -> DbResult<Vec<u8>> {
        Ok(borsh::to_vec(self)?)
    }

    fn deserialize(bytes: &[u8]) -> DbResult<Self> {
        Ok(borsh::from_slice(bytes)?)
    }
}

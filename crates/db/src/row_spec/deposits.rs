//! Row spec for deposits.

use liquidstake_primitives::{
    deposit::Deposit,
    types::{ChainId, Epoch},
};

use super::{
    kv::{KVRowSpec, PackableKey},
    DEPOSIT_PREFIX,
};
use crate::errors::{DbError, DbResult};

/// Key for a deposit row: the `(chain_id, epoch)` pair.
///
/// The chain id is length-prefixed so that the rows of one chain form a contiguous range ordered
/// by epoch, and no chain id is a prefix of another's range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepositKey {
    /// The chain the deposit is destined for.
    pub chain_id: ChainId,

    /// The epoch of the deposit.
    pub epoch: Epoch,
}

impl DepositKey {
    /// Returns the key of `deposit`.
    pub fn of(deposit: &Deposit) -> Self {
        Self {
            chain_id: deposit.chain_id.clone(),
            epoch: deposit.epoch,
        }
    }

    /// Returns the prefix shared by every deposit of `chain_id`.
    pub fn chain_prefix(chain_id: &str) -> DbResult<Vec<u8>> {
        let len = u16::try_from(chain_id.len())
            .map_err(|_| DbError::MalformedKey(format!("chain id too long: {}", chain_id.len())))?;

        let mut prefix = Vec::with_capacity(1 + 2 + chain_id.len() + 8);
        prefix.push(DEPOSIT_PREFIX);
        prefix.extend_from_slice(&len.to_be_bytes());
        prefix.extend_from_slice(chain_id.as_bytes());

        Ok(prefix)
    }

    /// Returns the prefix shared by every deposit.
    pub fn table_prefix() -> Vec<u8> {
        vec![DEPOSIT_PREFIX]
    }
}

impl PackableKey for DepositKey {
    fn pack(&self) -> DbResult<Vec<u8>> {
        let mut key = Self::chain_prefix(&self.chain_id)?;
        key.extend_from_slice(&self.epoch.to_be_bytes());

        Ok(key)
    }
}

/// ZST for the deposit row spec.
#[derive(Debug)]
pub struct DepositRowSpec;

impl KVRowSpec for DepositRowSpec {
    type Key = DepositKey;
    type Value = Deposit;
}

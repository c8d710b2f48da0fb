//! The deposit store: CRUD and the derived queries used by the lifecycle manager, the redemption
//! waterfall and the exchange-rate engine.

use liquidstake_primitives::{
    deposit::{Deposit, DepositState},
    types::Epoch,
};
use tracing::trace;

use crate::{
    errors::{DbError, DbResult},
    kv::{KvRead, KvWrite, RowRead, RowWrite},
    row_spec::deposits::{DepositKey, DepositRowSpec},
};

/// Read access to deposits.
///
/// Implemented for every [`KvRead`].
pub trait DepositReader: KvRead {
    /// Returns every stored deposit, grouped by chain and in ascending epoch order within a chain.
    fn all_deposits(&self) -> DbResult<Vec<Deposit>> {
        self.scan_rows::<DepositRowSpec>(&DepositKey::table_prefix())
    }

    /// Returns every deposit of `chain_id` in ascending epoch order.
    fn deposits_for_chain(&self, chain_id: &str) -> DbResult<Vec<Deposit>> {
        self.scan_rows::<DepositRowSpec>(&DepositKey::chain_prefix(chain_id)?)
    }

    /// Returns the deposit of `chain_id` at `epoch`, if any.
    fn deposit_for_chain_and_epoch(
        &self,
        chain_id: &str,
        epoch: Epoch,
    ) -> DbResult<Option<Deposit>> {
        let key = DepositKey {
            chain_id: chain_id.to_string(),
            epoch,
        };

        self.get_row::<DepositRowSpec>(&key)
    }

    /// Returns the deposits tagged with the correlation id `sequence_id`, across all chains.
    ///
    /// An empty `sequence_id` never matches since pending deposits carry no correlation id.
    fn deposits_with_sequence_id(&self, sequence_id: &str) -> DbResult<Vec<Deposit>> {
        if sequence_id.is_empty() {
            return Ok(Vec::new());
        }

        Ok(self
            .all_deposits()?
            .into_iter()
            .filter(|deposit| deposit.ibc_sequence_id == sequence_id)
            .collect())
    }

    /// Returns the pending deposits of every chain whose epoch is at most `epoch`.
    fn pending_deposits_before_epoch(&self, epoch: Epoch) -> DbResult<Vec<Deposit>> {
        Ok(self
            .all_deposits()?
            .into_iter()
            .filter(|deposit| deposit.state == DepositState::Pending && deposit.epoch <= epoch)
            .collect())
    }

    /// Returns the pending deposits of `chain_id` in ascending epoch order.
    fn pending_deposits_for_chain(&self, chain_id: &str) -> DbResult<Vec<Deposit>> {
        deposits_in_state(self, chain_id, DepositState::Pending)
    }

    /// Returns the deposits of `chain_id` that have arrived on the host chain and can be
    /// delegated.
    fn delegable_deposits_for_chain(&self, chain_id: &str) -> DbResult<Vec<Deposit>> {
        deposits_in_state(self, chain_id, DepositState::Received)
    }

    /// Returns the deposits of `chain_id` whose delegation is in flight.
    fn delegating_deposits_for_chain(&self, chain_id: &str) -> DbResult<Vec<Deposit>> {
        deposits_in_state(self, chain_id, DepositState::Delegating)
    }

    /// Returns the total amount of `chain_id`'s deposits still on the origin ledger.
    fn deposit_amount_on_origin(&self, chain_id: &str) -> DbResult<u128> {
        sum_amounts(self, chain_id, DepositState::is_on_origin)
    }

    /// Returns the total amount of `chain_id`'s deposits on the host chain but not yet counted by
    /// its delegation totals.
    fn deposit_amount_on_host_chain(&self, chain_id: &str) -> DbResult<u128> {
        sum_amounts(self, chain_id, DepositState::is_on_host_chain)
    }
}

impl<T: KvRead + ?Sized> DepositReader for T {}

/// Write access to deposits.
///
/// Implemented for every [`KvWrite`].
pub trait DepositWriter: KvWrite {
    /// Inserts or replaces the deposit keyed by its `(chain_id, epoch)`.
    fn set_deposit(&mut self, deposit: &Deposit) -> DbResult<()> {
        trace!(chain_id = %deposit.chain_id, epoch = deposit.epoch, state = %deposit.state, amount = %deposit.amount, "storing deposit");

        self.put_row::<DepositRowSpec>(&DepositKey::of(deposit), deposit)
    }

    /// Removes the deposit keyed by `deposit`'s `(chain_id, epoch)`; a no-op if absent.
    fn delete_deposit(&mut self, deposit: &Deposit) -> DbResult<()> {
        trace!(chain_id = %deposit.chain_id, epoch = deposit.epoch, "deleting deposit");

        self.delete_row::<DepositRowSpec>(&DepositKey::of(deposit))
    }
}

impl<T: KvWrite + ?Sized> DepositWriter for T {}

fn deposits_in_state<S: KvRead + ?Sized>(
    store: &S,
    chain_id: &str,
    state: DepositState,
) -> DbResult<Vec<Deposit>> {
    Ok(store
        .deposits_for_chain(chain_id)?
        .into_iter()
        .filter(|deposit| deposit.state == state)
        .collect())
}

fn sum_amounts<S: KvRead + ?Sized>(
    store: &S,
    chain_id: &str,
    predicate: impl Fn(&DepositState) -> bool,
) -> DbResult<u128> {
    store
        .deposits_for_chain(chain_id)?
        .iter()
        .filter(|deposit| predicate(&deposit.state))
        .try_fold(0u128, |total, deposit| total.checked_add(deposit.amount.amount))
        .ok_or_else(|| DbError::AmountOverflow {
            chain_id: chain_id.to_string(),
        })
}

//! The deposit lifecycle manager.
//!
//! Creates one deposit per active host chain at every delegation epoch and moves deposits through
//! their lifecycle as the cross-chain packets carrying them are dispatched, acknowledged or fail.
//! Every state change goes through [`DepositSM`]; this module only selects the deposits and
//! executes the duties the machine emits.

use liquidstake_db::{
    deposits::{DepositReader, DepositWriter},
    host_chains::HostChainReader,
};
use liquidstake_primitives::{
    coin::Coin,
    deposit::{Deposit, DepositState},
    ibc,
    types::{Epoch, PacketSequence},
};
use liquidstake_sm::{
    deposit::{
        duties::DepositDuty, errors::DSMError, events::DepositEvent, machine::DepositSM,
    },
    state_machine::StateMachine,
};
use tracing::{debug, info, warn};

use crate::{
    ctx::Ctx,
    errors::{EngineError, EngineResult},
    keeper::Keeper,
};

impl Keeper {
    /// Creates an empty pending deposit at `epoch` for every active host chain that does not have
    /// one yet.
    ///
    /// Returns the number of deposits created.
    pub fn create_deposits(&self, ctx: &mut Ctx<'_>, epoch: Epoch) -> EngineResult<usize> {
        let mut created = 0;

        for host_chain in ctx.all_host_chains()? {
            if !host_chain.active {
                debug!(chain_id = %host_chain.chain_id, %epoch, "skipping inactive host chain");
                continue;
            }

            if ctx
                .deposit_for_chain_and_epoch(&host_chain.chain_id, epoch)?
                .is_some()
            {
                continue;
            }

            let deposit = Deposit::new_pending(
                host_chain.chain_id.clone(),
                epoch,
                host_chain.ibc_denom(),
            );
            ctx.set_deposit(&deposit)?;
            created += 1;

            info!(chain_id = %host_chain.chain_id, %epoch, "created deposit");
        }

        Ok(created)
    }

    /// Returns the correlation id of packet `sequence` on `channel_id`.
    pub fn transaction_sequence_id(&self, channel_id: &str, sequence: PacketSequence) -> String {
        ibc::transaction_sequence_id(channel_id, sequence)
    }

    /// Steps each of `deposits` back one lifecycle stage and stores the result.
    ///
    /// Pending deposits are stored unchanged.
    pub fn revert_deposits_state(
        &self,
        ctx: &mut Ctx<'_>,
        deposits: &[Deposit],
    ) -> EngineResult<()> {
        for deposit in deposits {
            let from = deposit.state;
            apply_event(ctx, deposit.clone(), DepositEvent::Failed)?;

            info!(chain_id = %deposit.chain_id, epoch = deposit.epoch, %from, "reverted deposit");
        }

        Ok(())
    }

    /// Adds `amount` to the pending deposit of `chain_id` at `epoch`.
    pub fn credit_deposit(
        &self,
        ctx: &mut Ctx<'_>,
        chain_id: &str,
        epoch: Epoch,
        amount: &Coin,
    ) -> EngineResult<Deposit> {
        let mut deposit = ctx
            .deposit_for_chain_and_epoch(chain_id, epoch)?
            .ok_or_else(|| EngineError::NotFound(format!("deposit of {chain_id} at {epoch}")))?;

        if deposit.state != DepositState::Pending {
            return Err(DSMError::Rejected {
                state: deposit.state,
                reason: "only pending deposits can be credited".to_string(),
            }
            .into());
        }

        if deposit.amount.denom != amount.denom {
            return Err(EngineError::DenomMismatch {
                expected: deposit.amount.denom,
                got: amount.denom.clone(),
            });
        }

        deposit.amount = deposit
            .amount
            .checked_add(amount)
            .map_err(|_| EngineError::AmountOverflow)?;
        ctx.set_deposit(&deposit)?;

        debug!(%chain_id, %epoch, credited = %amount, total = %deposit.amount, "credited deposit");

        Ok(deposit)
    }

    /// Records that `deposits` were transferred to their host chain in packet `sequence` on
    /// `channel_id`.
    pub fn mark_deposits_sent(
        &self,
        ctx: &mut Ctx<'_>,
        deposits: &[Deposit],
        channel_id: &str,
        sequence: PacketSequence,
    ) -> EngineResult<()> {
        for deposit in deposits {
            apply_event(
                ctx,
                deposit.clone(),
                DepositEvent::TransferDispatched {
                    channel_id: channel_id.to_string(),
                    sequence,
                },
            )?;
        }

        info!(%channel_id, %sequence, count = deposits.len(), "marked deposits as sent");

        Ok(())
    }

    /// Handles the acknowledgement of the transfer packet `sequence_id`.
    ///
    /// Returns the number of deposits that arrived on their host chain.
    pub fn on_transfer_acknowledged(
        &self,
        ctx: &mut Ctx<'_>,
        sequence_id: &str,
    ) -> EngineResult<usize> {
        self.apply_to_sequence(
            ctx,
            sequence_id,
            &[DepositState::Sent],
            DepositEvent::TransferAcknowledged,
        )
    }

    /// Records that every received deposit of `chain_id` is being delegated in packet `sequence`
    /// on `channel_id`.
    ///
    /// Returns the number of deposits being delegated.
    pub fn mark_deposits_delegating(
        &self,
        ctx: &mut Ctx<'_>,
        chain_id: &str,
        channel_id: &str,
        sequence: PacketSequence,
    ) -> EngineResult<usize> {
        let deposits = ctx.delegable_deposits_for_chain(chain_id)?;

        for deposit in &deposits {
            apply_event(
                ctx,
                deposit.clone(),
                DepositEvent::DelegationDispatched {
                    channel_id: channel_id.to_string(),
                    sequence,
                },
            )?;
        }

        info!(%chain_id, %channel_id, %sequence, count = deposits.len(), "marked deposits as delegating");

        Ok(deposits.len())
    }

    /// Handles the acknowledgement of the delegation packet `sequence_id`.
    ///
    /// The delegated deposits are removed. Returns how many there were.
    pub fn on_delegation_acknowledged(
        &self,
        ctx: &mut Ctx<'_>,
        sequence_id: &str,
    ) -> EngineResult<usize> {
        self.apply_to_sequence(
            ctx,
            sequence_id,
            &[DepositState::Delegating],
            DepositEvent::DelegationAcknowledged,
        )
    }

    /// Handles the failure or timeout of the packet `sequence_id`.
    ///
    /// Only deposits whose in-flight packet it was are reverted. Returns how many there were.
    pub fn on_packet_failed(&self, ctx: &mut Ctx<'_>, sequence_id: &str) -> EngineResult<usize> {
        let deposits = in_flight(ctx, sequence_id, &[DepositState::Sent, DepositState::Delegating])?;
        self.revert_deposits_state(ctx, &deposits)?;

        Ok(deposits.len())
    }

    fn apply_to_sequence(
        &self,
        ctx: &mut Ctx<'_>,
        sequence_id: &str,
        states: &[DepositState],
        event: DepositEvent,
    ) -> EngineResult<usize> {
        let deposits = in_flight(ctx, sequence_id, states)?;

        for deposit in &deposits {
            apply_event(ctx, deposit.clone(), event.clone())?;
        }

        info!(%sequence_id, %event, count = deposits.len(), "applied packet outcome");

        Ok(deposits.len())
    }
}

/// Returns the deposits tagged with `sequence_id` that are in one of `states`.
fn in_flight(
    ctx: &Ctx<'_>,
    sequence_id: &str,
    states: &[DepositState],
) -> EngineResult<Vec<Deposit>> {
    let (matching, stale): (Vec<_>, Vec<_>) = ctx
        .deposits_with_sequence_id(sequence_id)?
        .into_iter()
        .partition(|deposit| states.contains(&deposit.state));

    if matching.is_empty() {
        warn!(%sequence_id, "no deposit awaits the outcome of this packet");
    }

    for deposit in stale {
        debug!(%sequence_id, chain_id = %deposit.chain_id, epoch = deposit.epoch, state = %deposit.state, "ignoring deposit that is no longer in flight");
    }

    Ok(matching)
}

/// Runs `event` through the state machine of `deposit` and executes the resulting duties.
fn apply_event(ctx: &mut Ctx<'_>, deposit: Deposit, event: DepositEvent) -> EngineResult<()> {
    let mut sm = DepositSM::new(deposit);
    let output = sm.process_event(event)?;

    for duty in output.duties {
        match duty {
            DepositDuty::Persist(deposit) => ctx.set_deposit(&deposit)?,
            DepositDuty::Remove(deposit) => ctx.delete_deposit(&deposit)?,
        }
    }

    Ok(())
}

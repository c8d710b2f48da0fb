//! The transitions of the Deposit State Machine.

use liquidstake_primitives::{
    deposit::DepositState, ibc::transaction_sequence_id, types::PacketSequence,
};

use crate::deposit::{
    duties::DepositDuty,
    errors::{DSMError, DSMResult},
    events::DepositEvent,
    machine::{DSMOutput, DepositSM},
};

impl DepositSM {
    pub(super) fn process_transfer_dispatched(
        &mut self,
        channel_id: &str,
        sequence: PacketSequence,
    ) -> DSMResult<DSMOutput> {
        self.expect_state(
            DepositState::Pending,
            || DepositEvent::TransferDispatched {
                channel_id: channel_id.to_string(),
                sequence,
            },
            "only pending deposits can be transferred",
        )?;
        self.expect_channel(channel_id)?;

        self.deposit.ibc_sequence_id = transaction_sequence_id(channel_id, sequence);
        self.transition_to(DepositState::Sent)
    }

    pub(super) fn process_transfer_acknowledged(&mut self) -> DSMResult<DSMOutput> {
        self.expect_state(
            DepositState::Sent,
            || DepositEvent::TransferAcknowledged,
            "no transfer is in flight",
        )?;

        self.transition_to(DepositState::Received)
    }

    pub(super) fn process_delegation_dispatched(
        &mut self,
        channel_id: &str,
        sequence: PacketSequence,
    ) -> DSMResult<DSMOutput> {
        self.expect_state(
            DepositState::Received,
            || DepositEvent::DelegationDispatched {
                channel_id: channel_id.to_string(),
                sequence,
            },
            "only received deposits can be delegated",
        )?;
        self.expect_channel(channel_id)?;

        self.deposit.ibc_sequence_id = transaction_sequence_id(channel_id, sequence);
        self.transition_to(DepositState::Delegating)
    }

    pub(super) fn process_delegation_acknowledged(&mut self) -> DSMResult<DSMOutput> {
        self.expect_state(
            DepositState::Delegating,
            || DepositEvent::DelegationAcknowledged,
            "no delegation is in flight",
        )?;

        Ok(DSMOutput::with_duties(vec![DepositDuty::Remove(
            self.deposit.clone(),
        )]))
    }

    /// Steps the deposit back one stage.
    ///
    /// A pending deposit stays pending but is still persisted, so a revert never fails on state.
    /// The correlation id is kept so the reverted deposit can still be traced to the failed packet.
    pub(super) fn process_failed(&mut self) -> DSMResult<DSMOutput> {
        let previous = match self.deposit.state {
            DepositState::Pending | DepositState::Sent => DepositState::Pending,
            DepositState::Received => DepositState::Sent,
            DepositState::Delegating => DepositState::Received,
        };

        self.transition_to(previous)
    }

    fn expect_state(
        &self,
        expected: DepositState,
        event: impl FnOnce() -> DepositEvent,
        reason: &str,
    ) -> DSMResult<()> {
        if self.deposit.state == expected {
            return Ok(());
        }

        Err(DSMError::InvalidEvent {
            state: self.deposit.state.to_string(),
            event: event().to_string(),
            reason: Some(reason.to_string()),
        })
    }

    fn expect_channel(&self, channel_id: &str) -> DSMResult<()> {
        if channel_id.is_empty() {
            return Err(DSMError::Rejected {
                state: self.deposit.state,
                reason: "channel id must not be empty".to_string(),
            });
        }

        Ok(())
    }

    fn transition_to(&mut self, state: DepositState) -> DSMResult<DSMOutput> {
        self.deposit.state = state;

        Ok(DSMOutput::with_duties(vec![DepositDuty::Persist(
            self.deposit.clone(),
        )]))
    }
}

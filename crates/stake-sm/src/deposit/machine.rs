//! The Deposit State Machine (DSM).
//!
//! Responsible for driving a deposit through its lifecycle by reacting to events and producing
//! the duties required to record each step.

use liquidstake_primitives::deposit::{Deposit, DepositState};

use crate::{
    deposit::{duties::DepositDuty, errors::DSMError, events::DepositEvent},
    state_machine::{SMOutput, StateMachine},
};

/// The State Machine that tracks the lifecycle stage of a single deposit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepositSM {
    pub(super) deposit: Deposit,
}

impl StateMachine for DepositSM {
    type Duty = DepositDuty;
    type Event = DepositEvent;
    type Error = DSMError;

    fn process_event(&mut self, event: Self::Event) -> Result<DSMOutput, Self::Error> {
        match event {
            DepositEvent::TransferDispatched {
                channel_id,
                sequence,
            } => self.process_transfer_dispatched(&channel_id, sequence),
            DepositEvent::TransferAcknowledged => self.process_transfer_acknowledged(),
            DepositEvent::DelegationDispatched {
                channel_id,
                sequence,
            } => self.process_delegation_dispatched(&channel_id, sequence),
            DepositEvent::DelegationAcknowledged => self.process_delegation_acknowledged(),
            DepositEvent::Failed => self.process_failed(),
        }
    }
}

/// The output of the Deposit State Machine after processing an event.
pub type DSMOutput = SMOutput<DepositDuty>;

impl DepositSM {
    /// Wraps `deposit`, resuming from whatever state it is in.
    pub const fn new(deposit: Deposit) -> Self {
        Self { deposit }
    }

    /// Returns the deposit as it currently is.
    pub const fn deposit(&self) -> &Deposit {
        &self.deposit
    }

    /// Returns the current state of the deposit.
    pub const fn state(&self) -> &DepositState {
        &self.deposit.state
    }
}

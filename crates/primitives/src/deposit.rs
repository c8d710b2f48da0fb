//! The deposit record: one unit of capital in flight for a `(chain, epoch)` pair.

use std::fmt::Display;

use arbitrary::Arbitrary;
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::{
    coin::Coin,
    types::{ChainId, Epoch},
};

/// The stage a deposit has reached on its way from the origin ledger into delegation.
///
/// The order of the variants is the order of the lifecycle. A deposit whose delegation has been
/// acknowledged is deleted rather than moved to a terminal state since, from then on, its value is
/// tracked by the host chain's delegation totals.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    BorshSerialize,
    BorshDeserialize,
    Arbitrary,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[borsh(use_discriminant = true)]
#[repr(u8)]
pub enum DepositState {
    /// Recorded on the origin ledger, not yet dispatched.
    #[default]
    Pending = 0,

    /// The transfer to the host chain has been dispatched but not acknowledged.
    Sent = 1,

    /// The funds have arrived on the host chain and are waiting to be delegated.
    Received = 2,

    /// The delegation has been dispatched but not acknowledged.
    Delegating = 3,
}

impl DepositState {
    /// All states, in lifecycle order.
    pub const ALL: [DepositState; 4] = [
        DepositState::Pending,
        DepositState::Sent,
        DepositState::Received,
        DepositState::Delegating,
    ];

    /// Returns `true` if a deposit in this state still holds its funds on the origin ledger.
    pub const fn is_on_origin(&self) -> bool {
        matches!(self, DepositState::Pending | DepositState::Sent)
    }

    /// Returns `true` if a deposit in this state holds its funds on the host chain, outside of the
    /// host chain's delegation totals.
    pub const fn is_on_host_chain(&self) -> bool {
        matches!(self, DepositState::Received | DepositState::Delegating)
    }
}

impl Display for DepositState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state_str = match self {
            DepositState::Pending => "DEPOSIT_PENDING",
            DepositState::Sent => "DEPOSIT_SENT",
            DepositState::Received => "DEPOSIT_RECEIVED",
            DepositState::Delegating => "DEPOSIT_DELEGATING",
        };

        write!(f, "{state_str}")
    }
}

/// One unit of capital in flight for a single `(chain_id, epoch)` pair.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    BorshSerialize,
    BorshDeserialize,
    Arbitrary,
)]
pub struct Deposit {
    /// The host chain the capital is destined for.
    pub chain_id: ChainId,

    /// The epoch in which the capital was collected.
    pub epoch: Epoch,

    /// The amount collected, in the host chain's IBC denomination on the origin ledger.
    pub amount: Coin,

    /// The lifecycle stage.
    pub state: DepositState,

    /// The correlation id of the last cross-chain packet dispatched for this deposit.
    ///
    /// Empty until the first dispatch. A revert keeps the id of the packet that failed.
    pub ibc_sequence_id: String,
}

impl Deposit {
    /// Creates an empty pending deposit.
    pub fn new_pending(chain_id: impl Into<ChainId>, epoch: Epoch, denom: impl Into<String>) -> Self {
        Self {
            chain_id: chain_id.into(),
            epoch,
            amount: Coin::zero(denom),
            state: DepositState::Pending,
            ibc_sequence_id: String::new(),
        }
    }
}

impl Display for Deposit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Deposit({}@{}, {}, {})",
            self.chain_id, self.epoch, self.amount, self.state
        )
    }
}

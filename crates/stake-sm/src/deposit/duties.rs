//! The duties that need to be performed in response to deposit state transitions.

use std::fmt::Display;

use liquidstake_primitives::deposit::Deposit;

/// The duties that need to be performed to drive the Deposit State Machine forward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DepositDuty {
    /// Store the deposit as it now is.
    Persist(Deposit),

    /// Delete the deposit; its value is now tracked by the host chain's delegation totals.
    Remove(Deposit),
}

impl Display for DepositDuty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DepositDuty::Persist(deposit) => write!(f, "Persist {deposit}"),
            DepositDuty::Remove(deposit) => write!(f, "Remove {deposit}"),
        }
    }
}

//! Ready-made records for tests.

use liquidstake_primitives::{
    coin::Coin,
    dec::Dec,
    deposit::{Deposit, DepositState},
    host_chain::{HostChain, IcaAccount, Validator},
    types::Epoch,
};

/// Returns an active host chain with a rate of one, a `(0.85, 1.05)` band, a single validator
/// with nothing delegated and transfer channel `channel-0`.
pub fn host_chain(chain_id: &str) -> HostChain {
    HostChain {
        chain_id: chain_id.to_string(),
        connection_id: "connection-0".to_string(),
        channel_id: "channel-0".to_string(),
        port_id: "transfer".to_string(),
        host_denom: "uatom".to_string(),
        c_value: Dec::one(),
        last_c_value: Dec::one(),
        lower_c_value_limit: Dec::checked_from_ratio(85, 100).expect("non-zero denominator"),
        upper_c_value_limit: Dec::checked_from_ratio(105, 100).expect("non-zero denominator"),
        active: true,
        delegation_account: IcaAccount {
            address: format!("{chain_id}-delegation-address"),
            owner: format!("{chain_id}.delegate"),
        },
        rewards_account: IcaAccount {
            address: format!("{chain_id}-rewards-address"),
            owner: format!("{chain_id}.rewards"),
        },
        validators: vec![Validator {
            operator_address: format!("{chain_id}-valoper"),
            delegated_amount: 0,
        }],
    }
}

/// Returns a deposit for `host_chain` denominated in its IBC denomination.
pub fn deposit(
    host_chain: &HostChain,
    epoch: Epoch,
    amount: u128,
    state: DepositState,
) -> Deposit {
    Deposit {
        chain_id: host_chain.chain_id.clone(),
        epoch,
        amount: Coin::new(host_chain.ibc_denom(), amount),
        state,
        ibc_sequence_id: String::new(),
    }
}

/// Returns a deposit in `state` tagged with `sequence_id`.
pub fn tagged_deposit(
    host_chain: &HostChain,
    epoch: Epoch,
    amount: u128,
    state: DepositState,
    sequence_id: &str,
) -> Deposit {
    Deposit {
        ibc_sequence_id: sequence_id.to_string(),
        ..deposit(host_chain, epoch, amount, state)
    }
}

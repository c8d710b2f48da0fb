//! The host-chain record as seen by the deposit accounting core.
//!
//! Host chains are registered and governed elsewhere; the core reads their connectivity, bounds
//! and delegation totals, and writes back the exchange rate and the `active` flag.

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::{
    constants::MINT_DENOM_PREFIX,
    dec::Dec,
    ibc::ibc_denom,
    types::ChainId,
};

/// An interchain account controlled by the module on a host chain.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
pub struct IcaAccount {
    /// The address of the account on the host chain.
    pub address: String,

    /// The owner string used to derive the controller port.
    pub owner: String,
}

/// A validator on the host chain that the module delegates to.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
pub struct Validator {
    /// The operator address of the validator.
    pub operator_address: String,

    /// The amount the module currently has delegated to this validator.
    pub delegated_amount: u128,
}

/// A chain that the protocol liquid-stakes on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct HostChain {
    /// The chain id of the host chain.
    pub chain_id: ChainId,

    /// The IBC connection to the host chain.
    pub connection_id: String,

    /// The transfer channel on the origin side.
    pub channel_id: String,

    /// The transfer port on the origin side.
    pub port_id: String,

    /// The staking denomination on the host chain.
    pub host_denom: String,

    /// The current exchange rate: minted receipt tokens per unit of backing.
    pub c_value: Dec,

    /// The exchange rate before the last update.
    pub last_c_value: Dec,

    /// The exclusive lower bound of the allowed exchange rate.
    pub lower_c_value_limit: Dec,

    /// The exclusive upper bound of the allowed exchange rate.
    pub upper_c_value_limit: Dec,

    /// Whether the chain accepts new operations.
    ///
    /// Cleared by the exchange-rate engine when the rate leaves its band.
    pub active: bool,

    /// The interchain account holding delegations.
    pub delegation_account: IcaAccount,

    /// The interchain account collecting rewards.
    pub rewards_account: IcaAccount,

    /// The validators the module delegates to.
    pub validators: Vec<Validator>,
}

impl HostChain {
    /// Returns the denomination of the receipt token minted for this chain.
    pub fn mint_denom(&self) -> String {
        format!("{MINT_DENOM_PREFIX}/{}", self.host_denom)
    }

    /// Returns the denomination the host token carries on the origin ledger.
    pub fn ibc_denom(&self) -> String {
        ibc_denom(&self.port_id, &self.channel_id, &self.host_denom)
    }

    /// Returns the total amount delegated across all validators, or `None` on overflow.
    pub fn total_delegations(&self) -> Option<u128> {
        self.validators
            .iter()
            .try_fold(0u128, |acc, v| acc.checked_add(v.delegated_amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host_chain() -> HostChain {
        HostChain {
            chain_id: "cosmoshub-4".to_string(),
            connection_id: "connection-0".to_string(),
            channel_id: "channel-0".to_string(),
            port_id: "transfer".to_string(),
            host_denom: "uatom".to_string(),
            c_value: Dec::one(),
            last_c_value: Dec::one(),
            lower_c_value_limit: "0.85".parse().unwrap(),
            upper_c_value_limit: "1.0".parse().unwrap(),
            active: true,
            delegation_account: IcaAccount::default(),
            rewards_account: IcaAccount::default(),
            validators: vec![
                Validator {
                    operator_address: "cosmosvaloper1a".to_string(),
                    delegated_amount: 1_000,
                },
                Validator {
                    operator_address: "cosmosvaloper1b".to_string(),
                    delegated_amount: 2_500,
                },
            ],
        }
    }

    #[test]
    fn test_denoms() {
        let hc = host_chain();

        assert_eq!(hc.mint_denom(), "stk/uatom");
        assert!(hc.ibc_denom().starts_with("ibc/"));
    }

    #[test]
    fn test_total_delegations() {
        let mut hc = host_chain();
        assert_eq!(hc.total_delegations(), Some(3_500));

        hc.validators[0].delegated_amount = u128::MAX;
        assert_eq!(hc.total_delegations(), None);
    }

    #[test]
    fn test_borsh_round_trip_preserves_rates() {
        let hc = host_chain();
        let bytes = borsh::to_vec(&hc).unwrap();

        assert_eq!(borsh::from_slice::<HostChain>(&bytes).unwrap(), hc);
    }
}

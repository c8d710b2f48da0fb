//! The protocol parameter singleton.

use borsh::{BorshDeserialize, BorshSerialize};
use liquidstake_primitives::dec::Dec;
use serde::{Deserialize, Serialize};

use crate::{
    default::{AUTOCOMPOUND_FACTOR, DELEGATION_EPOCH_IDENTIFIER, IBC_TIMEOUT_HEIGHT_INCREMENT},
    errors::ParamsError,
};

/// Parameters governing the deposit accounting core.
///
/// These are set through governance and read at the start of every unit of work; the core never
/// caches them.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
#[serde(default)]
pub struct Params {
    /// The address allowed to perform administrative actions.
    pub admin_address: String,

    /// The address protocol fees are sent to.
    pub fee_address: String,

    /// The identifier of the epoch schedule at whose start deposits are created.
    pub delegation_epoch_identifier: String,

    /// The number of blocks after the current height at which an outgoing transfer times out.
    pub ibc_timeout_height_increment: u64,

    /// The yearly autocompounding factor, in percent.
    pub autocompound_factor: Dec,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            admin_address: String::new(),
            fee_address: String::new(),
            delegation_epoch_identifier: DELEGATION_EPOCH_IDENTIFIER.to_string(),
            ibc_timeout_height_increment: IBC_TIMEOUT_HEIGHT_INCREMENT,
            autocompound_factor: Dec::from_int(AUTOCOMPOUND_FACTOR),
        }
    }
}

impl Params {
    /// Checks that the parameters are usable.
    ///
    /// Addresses may be left empty; operations that need them fail individually.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.delegation_epoch_identifier.is_empty() {
            return Err(ParamsError::Empty("delegation_epoch_identifier"));
        }

        if self.ibc_timeout_height_increment == 0 {
            return Err(ParamsError::NotPositive("ibc_timeout_height_increment"));
        }

        if self.autocompound_factor.is_zero() {
            return Err(ParamsError::NotPositive("autocompound_factor"));
        }

        Ok(())
    }
}

//! Default values for the protocol parameters.

/// Default identifier of the epoch schedule that drives deposit creation.
pub(crate) const DELEGATION_EPOCH_IDENTIFIER: &str = "day";

/// Default number of blocks added to the current height to compute an IBC transfer's timeout.
pub(crate) const IBC_TIMEOUT_HEIGHT_INCREMENT: u64 = 1_000;

/// Default yearly autocompounding factor, in percent.
pub(crate) const AUTOCOMPOUND_FACTOR: u128 = 20;

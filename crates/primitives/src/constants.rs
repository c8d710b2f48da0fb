//! Constants that are integral to how records are named and priced.
//!
//! Changing any of these values changes the identity of existing on-chain objects (denominations,
//! ports) so they are fixed at compile-time.

/// The prefix of the denomination minted for a host chain's liquid receipt token.
pub const MINT_DENOM_PREFIX: &str = "stk";

/// The prefix of a hashed IBC voucher denomination.
pub const IBC_DENOM_PREFIX: &str = "ibc";

/// The port prefix used by interchain account controllers.
pub const ICA_CONTROLLER_PORT_PREFIX: &str = "icacontroller-";

/// The infix joining a channel id and a packet sequence into a correlation id.
pub const SEQUENCE_INFIX: &str = "-sequence-";

/// The number of decimal places carried by [`Dec`](crate::dec::Dec).
pub const DEC_PRECISION: u32 = 18;

//! Layout of every record type in the ordered key space.
//!
//! Each record type owns a single-byte prefix so that prefix scans over one type never observe
//! another:
//!
//! | prefix | key                                              | value       |
//! |--------|--------------------------------------------------|-------------|
//! | `0x00` | -                                                | `Params`    |
//! | `0x01` | `chain_id`                                       | `HostChain` |
//! | `0x02` | `len(chain_id) as u16 BE ‖ chain_id ‖ epoch BE`  | `Deposit`   |
//!
//! Values are borsh-encoded.

pub mod deposits;
pub mod host_chains;
pub mod kv;
pub mod params;

/// Prefix of the params singleton.
pub const PARAMS_PREFIX: u8 = 0x00;

/// Prefix of host-chain records.
pub const HOST_CHAIN_PREFIX: u8 = 0x01;

/// Prefix of deposit records.
pub const DEPOSIT_PREFIX: u8 = 0x02;

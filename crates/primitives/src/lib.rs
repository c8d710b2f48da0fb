//! This crate contains the types and pure functions shared by every other crate in the liquid-stake
//! workspace: amounts, fixed-point ratios, deposit and host-chain records, and the IBC naming
//! helpers used to correlate cross-chain packets.
//!
//! It lies at the bottom of the crate hierarchy in this workspace i.e., it does not depend on any
//! other crate in this workspace.

pub mod coin;
pub mod constants;
pub mod dec;
pub mod deposit;
pub mod errors;
pub mod host_chain;
pub mod ibc;
pub mod types;

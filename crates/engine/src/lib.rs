//! The deposit accounting and exchange-rate core of the liquid-staking protocol.
//!
//! Everything is driven through a [`keeper::Keeper`], which owns the external collaborators, and
//! runs inside a unit of work opened by [`keeper::Keeper::execute`]. A unit of work stages all
//! store writes, events and telemetry samples in a [`ctx::Ctx`] and only makes them visible once
//! the operation returns successfully.
//!
//! The operations are grouped by concern:
//!
//! - [`lifecycle`]: creating epoch deposits and moving them through their lifecycle.
//! - [`redemption`]: the waterfall that covers withdrawals from pending deposits.
//! - [`rates`]: the exchange-rate engine and its safety band.
//! - [`ibc`]: the cross-chain plumbing the above rely on.
//! - [`hooks`]: reactions to epoch boundaries.

pub mod ctx;
pub mod errors;
pub mod events;
pub mod hooks;
pub mod ibc;
pub mod interfaces;
pub mod keeper;
pub mod lifecycle;
pub mod logging;
pub mod rates;
pub mod redemption;
pub mod telemetry;

#[cfg(test)]
pub(crate) mod testing;

//! This crate implements the state machine that drives a deposit from the origin ledger into
//! delegation on its host chain.
//!
//! The machine is pure: it reacts to events by updating the deposit it wraps and emitting duties.
//! Executing those duties against storage is left to the caller, so the same machine can be
//! driven from a transactional context or from tests.

pub mod deposit;
pub mod state_machine;

#[cfg(test)]
pub(crate) mod testing;

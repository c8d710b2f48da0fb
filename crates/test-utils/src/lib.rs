//! This crate provides test-utilities shared by the crates of the liquid-stake workspace.
//!
//! These are mostly generators of arbitrary records and ready-made fixtures for host chains and
//! deposits.

pub mod arbitrary_generator;
pub mod fixtures;

//! Generic testing utilities for state machines.
//!
//! - [`transition`] - Value-based transition testing helpers
//! - [`proptest`] - Property-based testing macros

pub(crate) mod proptest;
pub(crate) mod transition;

pub(crate) use transition::{
    test_invalid_transition, test_transition, EventSequence, InvalidTransition, Transition,
};

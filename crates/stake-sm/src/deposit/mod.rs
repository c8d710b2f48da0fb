//! The state machine for managing the lifecycle of a deposit.
//!
//! A deposit moves `Pending → Sent → Received → Delegating` and is removed once its delegation is
//! acknowledged. A failed or timed-out packet steps it back one stage so that the step can be
//! retried.

pub mod duties;
pub mod errors;
pub mod events;
pub mod machine;
mod transitions;

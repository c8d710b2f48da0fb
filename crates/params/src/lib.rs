//! This crate contains the protocol parameters that dictate how the deposit accounting core
//! behaves. Every replica must load identical parameters to arrive at identical state.

pub mod default;
pub mod errors;
pub mod protocol;

pub use protocol::Params;

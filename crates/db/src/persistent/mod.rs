//! Persistent backend on top of `sled`.

pub mod config;
pub mod store;

pub use self::{config::SledConfig, store::SledStore};

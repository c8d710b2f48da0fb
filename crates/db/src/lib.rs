//! Storage for the deposit accounting core.
//!
//! The crate is split into three layers:
//!
//! - [`kv`]: an ordered byte-oriented key-value abstraction with atomic batch commits, and the
//!   [`cache::CacheStore`] overlay that stages the writes of one unit of work.
//! - [`row_spec`]: how each record type is laid out in that key space.
//! - the typed stores ([`deposits`], [`host_chains`], [`params`]) that every
//!   [`kv::KvRead`]/[`kv::KvWrite`] implementor gets for free.
//!
//! Two backends are provided: [`inmemory::MemStore`] for tests and simulations, and
//! [`persistent::SledStore`] for durable storage.

pub mod cache;
pub mod deposits;
pub mod errors;
pub mod host_chains;
pub mod inmemory;
pub mod kv;
pub mod params;
pub mod persistent;
pub mod row_spec;

//! The context of a unit of work.

use liquidstake_db::{
    cache::CacheStore,
    errors::DbResult,
    kv::{KvPair, KvRead, KvWrite, WriteBatch},
};
use liquidstake_primitives::types::ChainId;

use crate::{
    events::Event,
    telemetry::{Gauge, GaugeSample},
};

/// The block the unit of work executes in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockHeader {
    /// The chain id of the origin ledger.
    pub chain_id: ChainId,

    /// The height of the block.
    pub height: u64,
}

/// Everything an engine operation reads from and writes to.
///
/// Store writes, events and telemetry samples are all buffered here. The owner of the context
/// decides whether they are committed or dropped; see
/// [`Keeper::execute`](crate::keeper::Keeper::execute).
#[derive(Debug)]
pub struct Ctx<'a> {
    store: CacheStore<'a>,
    header: BlockHeader,
    events: Vec<Event>,
    samples: Vec<GaugeSample>,
}

impl<'a> Ctx<'a> {
    /// Opens a context over `store` at `header`.
    pub fn new(store: &'a dyn KvRead, header: BlockHeader) -> Self {
        Self {
            store: CacheStore::new(store),
            header,
            events: Vec::new(),
            samples: Vec::new(),
        }
    }

    /// Returns the header of the block being executed.
    pub fn header(&self) -> &BlockHeader {
        &self.header
    }

    /// Queues an event.
    pub fn emit_event(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Queues a gauge sample.
    pub fn record_gauge(&mut self, gauge: Gauge, chain_id: &str, value: f64) {
        self.samples.push(GaugeSample {
            gauge,
            chain_id: chain_id.to_string(),
            value,
        });
    }

    /// Consumes the context, returning the buffered writes, events and samples.
    pub fn into_parts(self) -> (WriteBatch, Vec<Event>, Vec<GaugeSample>) {
        (self.store.into_batch(), self.events, self.samples)
    }
}

impl KvRead for Ctx<'_> {
    fn get(&self, key: &[u8]) -> DbResult<Option<Vec<u8>>> {
        self.store.get(key)
    }

    fn scan_prefix(&self, prefix: &[u8]) -> DbResult<Vec<KvPair>> {
        self.store.scan_prefix(prefix)
    }
}

impl KvWrite for Ctx<'_> {
    fn put(&mut self, key: Vec<u8>, value: Vec<u8>) {
        self.store.put(key, value);
    }

    fn remove(&mut self, key: Vec<u8>) {
        self.store.remove(key);
    }
}

//! The response store contract and an in-memory reference store.
//!
//! Persistence proper lives outside this crate; the engine only needs
//! a collaborator that can append validated events and hand back a
//! consistent snapshot of the events matching a filter. The in-memory
//! store serves tests, benches, and embedding applications that do not
//! need durable storage.

use log::{debug, trace};
use parking_lot::RwLock;
use rayon::prelude::*;

use crate::core::errors::Result;
use crate::core::{ResponseEvent, StatisticsFilter};

/// Storage collaborator consumed by the engine.
///
/// `fetch_matching` must return a consistent, complete snapshot of the
/// matching events; the engine never issues partial writes or
/// multi-step transactions against this contract.
pub trait ResponseStore {
    /// Fetch all stored events matching the filter
    fn fetch_matching(&self, filter: &StatisticsFilter) -> Result<Vec<ResponseEvent>>;

    /// Append one validated event
    fn append(&self, event: ResponseEvent) -> Result<()>;
}

/// Thread-safe in-memory store backed by an RwLock-guarded vector.
///
/// Reads clone matching events out under the read lock, so every
/// aggregation sees a stable snapshot regardless of concurrent
/// appends.
#[derive(Debug, Default)]
pub struct MemoryResponseStore {
    events: RwLock<Vec<ResponseEvent>>,
}

impl MemoryResponseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored events
    pub fn len(&self) -> usize {
        self.events.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.read().is_empty()
    }
}

impl ResponseStore for MemoryResponseStore {
    fn fetch_matching(&self, filter: &StatisticsFilter) -> Result<Vec<ResponseEvent>> {
        let events = self.events.read();
        let matching: Vec<ResponseEvent> = events
            .par_iter()
            .filter(|event| filter.matches(event))
            .cloned()
            .collect();
        debug!(
            "fetched {} of {} stored responses for filter",
            matching.len(),
            events.len()
        );
        Ok(matching)
    }

    fn append(&self, event: ResponseEvent) -> Result<()> {
        trace!(
            "appending response for session {} question {}",
            event.session_id,
            event.question_id
        );
        self.events.write().push(event);
        Ok(())
    }
}

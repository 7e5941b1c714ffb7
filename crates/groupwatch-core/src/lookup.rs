//! Data-access contract for a group's most recent event.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::LookupError;
use crate::event::LastEvent;

/// Supplies the most recent event recorded for a group.
///
/// Implementations are stateless from the checker's point of view: one call
/// in, one answer out, no hidden retries. `Ok(None)` is the explicit
/// "no event recorded for this group" signal and is distinct from failing
/// with an error.
#[async_trait]
pub trait LastEventLookup: Send + Sync {
    /// Load the last event for `group_id`, or `None` if the group has none.
    async fn load_last_event(&self, group_id: &str) -> Result<Option<LastEvent>, LookupError>;
}

/// Map-backed lookup holding one last event per group.
///
/// Useful as a test fixture and for callers that source events from
/// somewhere other than a database.
#[derive(Debug, Default)]
pub struct InMemoryEventStore {
    events: RwLock<HashMap<String, LastEvent>>,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or replace) the last event for a group.
    pub async fn record(&self, group_id: impl Into<String>, event: LastEvent) {
        self.events.write().await.insert(group_id.into(), event);
    }

    /// Forget the last event for a group, if any.
    pub async fn clear(&self, group_id: &str) {
        self.events.write().await.remove(group_id);
    }
}

#[async_trait]
impl LastEventLookup for InMemoryEventStore {
    async fn load_last_event(&self, group_id: &str) -> Result<Option<LastEvent>, LookupError> {
        Ok(self.events.read().await.get(group_id).cloned())
    }
}

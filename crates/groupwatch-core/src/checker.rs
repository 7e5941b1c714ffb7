//! Status checker: one lookup, one classification, no retained state.

use std::sync::Arc;

use crate::clock::{Clock, SystemClock};
use crate::error::LookupError;
use crate::event::{classify, EventStatus};
use crate::lookup::LastEventLookup;

/// Derives the lifecycle status of a group's most recent event.
///
/// Holds no state between calls, so concurrent checks for the same or
/// different groups are independent. Each call delegates exactly one lookup
/// and re-evaluates against a fresh "now" -- the status is never cached.
pub struct EventStatusChecker {
    lookup: Arc<dyn LastEventLookup>,
    clock: Arc<dyn Clock>,
}

impl EventStatusChecker {
    /// Checker reading the system wall clock.
    pub fn new(lookup: Arc<dyn LastEventLookup>) -> Self {
        Self::with_clock(lookup, Arc::new(SystemClock))
    }

    /// Checker with an injected time source.
    pub fn with_clock(lookup: Arc<dyn LastEventLookup>, clock: Arc<dyn Clock>) -> Self {
        Self { lookup, clock }
    }

    /// Check the status of `group_id`'s last event.
    ///
    /// Invokes the lookup exactly once with the given identifier. A lookup
    /// failure propagates unchanged; there is no retry and no fallback
    /// status.
    pub async fn check_status(&self, group_id: &str) -> Result<EventStatus, LookupError> {
        let event = self.lookup.load_last_event(group_id).await?;
        // Sample the clock only after the lookup resolves. "now" must not
        // go stale across the await.
        let now = self.clock.now();
        Ok(classify(now, event.as_ref()))
    }
}

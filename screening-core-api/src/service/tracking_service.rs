use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{RefreshTrigger, TrackingCacheEntry, TrackingStatus};
use crate::error::ScreeningResult;

/// Result of a refresh request routed through the cooldown.
#[derive(Debug, Clone, PartialEq)]
pub enum RefreshOutcome {
    /// The request fell inside the cooldown window and was dropped
    Suppressed,
    /// The request went through; the entry is whatever the cache now serves
    Refreshed(Option<Arc<TrackingCacheEntry>>),
}

/// Tracking side of the screening engine.
#[async_trait]
pub trait TrackingService: Send + Sync {
    /// Serve the tracked-person snapshot, fetching only when the cooldown
    /// allows it and the cached entry has expired.
    ///
    /// # Returns
    /// * `Ok(Some(entry))` - a fresh entry, from cache or remote
    /// * `Ok(None)` - the cooldown denied the fetch and nothing fresh is cached
    /// * `Err` - the remote fetch failed; the previous entry is left in place
    async fn synchronize(&self) -> ScreeningResult<Option<Arc<TrackingCacheEntry>>>;

    /// Invalidate the cache and fetch regardless of the cooldown.
    async fn synchronize_forced(&self) -> ScreeningResult<Arc<TrackingCacheEntry>>;

    /// Route a refresh request from `trigger` through the cooldown.
    async fn request_refresh(&self, trigger: RefreshTrigger) -> ScreeningResult<RefreshOutcome>;

    /// Apply a tracking change locally, then commit it remotely.
    ///
    /// The cache reflects `desired_is_tracking` before the remote call
    /// returns. If the remote mutation fails the optimistic write is
    /// discarded by a forced resynchronization and the mutation error is
    /// returned.
    async fn toggle(&self, name: &str, desired_is_tracking: bool) -> ScreeningResult<()>;

    /// Status currently served for `name`, without I/O.
    fn tracking_status(&self, name: &str) -> Option<TrackingStatus>;
}

use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use screening_core_api::TrackingCacheEntry;
use std::sync::Arc;

/// Time-boxed holder of the current tracking snapshot.
///
/// The entry is always replaced whole; there is no per-person update.
pub struct TrackingCache {
    ttl: Duration,
    entry: RwLock<Option<Arc<TrackingCacheEntry>>>,
}

impl TrackingCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entry: RwLock::new(None),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns the entry while `now - fetched_at < ttl`, otherwise `None`.
    pub fn read(&self, now: DateTime<Utc>) -> Option<Arc<TrackingCacheEntry>> {
        self.entry
            .read()
            .as_ref()
            .filter(|entry| entry.is_fresh(now, self.ttl))
            .cloned()
    }

    /// Returns the entry regardless of age.
    pub fn read_any(&self) -> Option<Arc<TrackingCacheEntry>> {
        self.entry.read().clone()
    }

    pub fn write(&self, entry: TrackingCacheEntry) -> Arc<TrackingCacheEntry> {
        let entry = Arc::new(entry);
        *self.entry.write() = Some(entry.clone());
        entry
    }

    /// Replaces the current entry with `rewrite(current)` under one write lock.
    ///
    /// Returns `None` without writing when the cache is empty.
    pub fn rewrite<R>(
        &self,
        rewrite: impl FnOnce(&TrackingCacheEntry) -> (TrackingCacheEntry, R),
    ) -> Option<R> {
        let mut guard = self.entry.write();
        let current = guard.as_ref()?;
        let (next, result) = rewrite(&**current);
        *guard = Some(Arc::new(next));
        Some(result)
    }

    pub fn invalidate(&self) {
        *self.entry.write() = None;
    }
}

use screening_core_api::{Clock, ScreeningResult, TrackingCacheEntry};
use screening_core_db::models::build_cache_entry;
use screening_core_db::repository::FetchTrackedPersons;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::cache::TrackingCache;
use super::governor::RefreshGovernor;

/// Publishes the authoritative tracked-person set into the cache.
pub struct TrackingSynchronizer<B> {
    backend: Arc<B>,
    cache: Arc<TrackingCache>,
    governor: Arc<RefreshGovernor>,
    clock: Arc<dyn Clock>,
    last_fingerprint: AtomicI64,
}

impl<B: FetchTrackedPersons> TrackingSynchronizer<B> {
    pub fn new(
        backend: Arc<B>,
        cache: Arc<TrackingCache>,
        governor: Arc<RefreshGovernor>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            backend,
            cache,
            governor,
            clock,
            last_fingerprint: AtomicI64::new(0),
        }
    }

    /// Governed refresh.
    ///
    /// Inside the cooldown window, or while the cached entry is fresh, the
    /// cache is served without I/O. Otherwise the snapshot is fetched and
    /// published. A failed fetch leaves the cache and the cooldown as they
    /// were.
    pub async fn synchronize(&self) -> ScreeningResult<Option<Arc<TrackingCacheEntry>>> {
        let now = self.clock.now();
        if !self.governor.should_proceed(now) {
            debug!("Tracking refresh suppressed by cooldown");
            return Ok(self.cache.read(now));
        }
        if let Some(entry) = self.cache.read(now) {
            debug!(fetched_at = %entry.fetched_at, "Serving tracking snapshot from cache");
            return Ok(Some(entry));
        }
        let Some(reservation) = self.governor.try_reserve(now) else {
            debug!("Tracking refresh already reserved by a concurrent trigger");
            return Ok(self.cache.read(now));
        };

        match self.fetch_and_publish().await {
            Ok(entry) => Ok(Some(entry)),
            Err(e) => {
                self.governor.release(reservation);
                warn!(error = %e, "Tracking refresh failed, keeping previous snapshot");
                Err(e)
            }
        }
    }

    /// Drops the cached entry and fetches regardless of the cooldown.
    ///
    /// This is the correction path after a known-wrong local write; it is
    /// the only caller allowed to bypass the governor.
    pub async fn synchronize_forced(&self) -> ScreeningResult<Arc<TrackingCacheEntry>> {
        self.cache.invalidate();
        let entry = self.fetch_and_publish().await?;
        self.governor.record(self.clock.now());
        Ok(entry)
    }

    async fn fetch_and_publish(&self) -> ScreeningResult<Arc<TrackingCacheEntry>> {
        let records = self.backend.fetch_tracked_persons().await?;
        let entry = build_cache_entry(records, self.clock.now())?;

        let previous = self.last_fingerprint.swap(entry.fingerprint, Ordering::Relaxed);
        info!(
            persons = entry.persons.len(),
            changed = previous != entry.fingerprint,
            "Tracking snapshot refreshed"
        );
        Ok(self.cache.write(entry))
    }
}

use screening_core_api::{
    Clock, ScreeningError, ScreeningResult, TrackingCacheEntry, TrackingStatus,
};
use screening_core_db::repository::{FetchTrackedPersons, SetTracking};
use std::sync::Arc;
use tracing::{error, info, warn};

use super::cache::TrackingCache;
use super::synchronizer::TrackingSynchronizer;

/// A tracking change already written to the cache and not yet confirmed.
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedToggle {
    pub name: String,
    pub desired_is_tracking: bool,
    /// Status served before the local write, `None` if the person was unknown
    pub prior: Option<TrackingStatus>,
    pub applied: TrackingStatus,
}

/// Optimistic tracking changes.
///
/// Phase one rewrites the cached entry immediately; phase two sends the
/// remote mutation. A rejected mutation is reverted by invalidating the
/// cache and forcing a resynchronization, not by restoring `prior`.
pub struct OptimisticTrackingToggle<B> {
    backend: Arc<B>,
    cache: Arc<TrackingCache>,
    synchronizer: Arc<TrackingSynchronizer<B>>,
    clock: Arc<dyn Clock>,
}

impl<B: FetchTrackedPersons + SetTracking> OptimisticTrackingToggle<B> {
    pub fn new(
        backend: Arc<B>,
        cache: Arc<TrackingCache>,
        synchronizer: Arc<TrackingSynchronizer<B>>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            backend,
            cache,
            synchronizer,
            clock,
        }
    }

    pub async fn toggle(&self, name: &str, desired_is_tracking: bool) -> ScreeningResult<()> {
        let applied = self.apply_locally(name, desired_is_tracking)?;
        self.commit(applied).await
    }

    /// Writes the desired status into the cached entry.
    ///
    /// The entry keeps its `fetched_at`; a local write never extends the
    /// entry's lifetime. Fails with `CachePrimingRequired` when nothing has
    /// been synchronized yet.
    pub fn apply_locally(&self, name: &str, desired_is_tracking: bool) -> ScreeningResult<AppliedToggle> {
        let now = self.clock.now();
        self.cache
            .rewrite(|current| {
                let prior = current.status(name).cloned();
                let applied = TrackingStatus::transition(prior.as_ref(), desired_is_tracking, now);

                let mut status_by_name = current.status_by_name.clone();
                status_by_name.insert(name.to_string(), applied.clone());
                let next = TrackingCacheEntry {
                    status_by_name,
                    persons: current.persons.clone(),
                    fetched_at: current.fetched_at,
                    fingerprint: 0,
                };
                let toggle = AppliedToggle {
                    name: name.to_string(),
                    desired_is_tracking,
                    prior,
                    applied,
                };
                (next, toggle)
            })
            .ok_or(ScreeningError::CachePrimingRequired)
    }

    /// Sends the remote mutation for a locally applied toggle.
    ///
    /// On failure the optimistic write is discarded through a forced
    /// resynchronization and the mutation error is returned; a failure of
    /// the resynchronization itself is only logged.
    pub async fn commit(&self, applied: AppliedToggle) -> ScreeningResult<()> {
        match self
            .backend
            .set_tracking(&applied.name, applied.desired_is_tracking)
            .await
        {
            Ok(()) => {
                info!(
                    name = %applied.name,
                    is_tracking = applied.desired_is_tracking,
                    "Tracking change confirmed"
                );
                Ok(())
            }
            Err(e) => {
                warn!(name = %applied.name, error = %e, "Tracking change rejected, resynchronizing");
                if let Err(sync_error) = self.synchronizer.synchronize_forced().await {
                    error!(
                        name = %applied.name,
                        error = %sync_error,
                        "Resynchronization after rejected tracking change failed"
                    );
                }
                Err(e)
            }
        }
    }
}

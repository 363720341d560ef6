use async_trait::async_trait;
use chrono::{DateTime, Utc};
use screening_core_api::{
    Clock, CustomerType, PendingApprovalService, PendingCustomer, ReconcileReport, RefreshOutcome,
    RefreshTrigger, ScreeningResult, TrackingCacheEntry, TrackingService, TrackingStatus,
};
use screening_core_db::repository::ScreeningBackend;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::approval::PendingApprovalReconciler;
use crate::config::EngineConfig;
use crate::tracking::{OptimisticTrackingToggle, RefreshGovernor, TrackingCache, TrackingSynchronizer};

/// One screening session's reconciliation engine.
///
/// Owns the only cache and cooldown governor its components use. Separate
/// engines share nothing.
pub struct ScreeningEngine<B> {
    clock: Arc<dyn Clock>,
    cache: Arc<TrackingCache>,
    governor: Arc<RefreshGovernor>,
    synchronizer: Arc<TrackingSynchronizer<B>>,
    toggle: OptimisticTrackingToggle<B>,
    approvals: PendingApprovalReconciler<B>,
}

impl<B: ScreeningBackend> ScreeningEngine<B> {
    pub fn new(backend: Arc<B>, clock: Arc<dyn Clock>, config: &EngineConfig) -> Self {
        let cache = Arc::new(TrackingCache::new(config.cache_ttl()));
        let governor = Arc::new(RefreshGovernor::new(config.refresh_cooldown()));
        let synchronizer = Arc::new(TrackingSynchronizer::new(
            backend.clone(),
            cache.clone(),
            governor.clone(),
            clock.clone(),
        ));
        let toggle = OptimisticTrackingToggle::new(
            backend.clone(),
            cache.clone(),
            synchronizer.clone(),
            clock.clone(),
        );
        let approvals = PendingApprovalReconciler::new(backend, synchronizer.clone());

        Self {
            clock,
            cache,
            governor,
            synchronizer,
            toggle,
            approvals,
        }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn tracking_cache(&self) -> &TrackingCache {
        &self.cache
    }

    pub fn refresh_governor(&self) -> &RefreshGovernor {
        &self.governor
    }

    pub fn tracking_toggle(&self) -> &OptimisticTrackingToggle<B> {
        &self.toggle
    }

    pub fn approvals(&self) -> &PendingApprovalReconciler<B> {
        &self.approvals
    }
}

#[async_trait]
impl<B: ScreeningBackend + 'static> TrackingService for ScreeningEngine<B> {
    async fn synchronize(&self) -> ScreeningResult<Option<Arc<TrackingCacheEntry>>> {
        self.synchronizer.synchronize().await
    }

    async fn synchronize_forced(&self) -> ScreeningResult<Arc<TrackingCacheEntry>> {
        self.synchronizer.synchronize_forced().await
    }

    async fn request_refresh(&self, trigger: RefreshTrigger) -> ScreeningResult<RefreshOutcome> {
        if !self.governor.should_proceed(self.clock.now()) {
            debug!(%trigger, "Refresh request dropped inside cooldown window");
            return Ok(RefreshOutcome::Suppressed);
        }

        let entry = self.synchronizer.synchronize().await?;
        if trigger.carries_onboarding_intent() {
            if let Err(e) = self.approvals.reconcile().await {
                warn!(%trigger, error = %e, "Reconciliation after refresh failed");
            }
        }
        Ok(RefreshOutcome::Refreshed(entry))
    }

    async fn toggle(&self, name: &str, desired_is_tracking: bool) -> ScreeningResult<()> {
        self.toggle.toggle(name, desired_is_tracking).await
    }

    fn tracking_status(&self, name: &str) -> Option<TrackingStatus> {
        self.cache
            .read(self.clock.now())
            .and_then(|entry| entry.status(name).cloned())
    }
}

#[async_trait]
impl<B: ScreeningBackend + 'static> PendingApprovalService for ScreeningEngine<B> {
    async fn reconcile(&self) -> ScreeningResult<ReconcileReport> {
        self.approvals.reconcile().await
    }

    async fn approve_match(
        &self,
        customer_type: CustomerType,
        customer_id: i64,
        match_id: i64,
        match_name: &str,
    ) -> ScreeningResult<()> {
        self.approvals
            .approve_match(customer_type, customer_id, match_id, match_name)
            .await
    }

    async fn reject_match(
        &self,
        customer_type: CustomerType,
        customer_id: i64,
        match_id: i64,
        match_name: &str,
    ) -> ScreeningResult<()> {
        self.approvals
            .reject_match(customer_type, customer_id, match_id, match_name)
            .await
    }

    fn pending_approvals(&self) -> Vec<PendingCustomer> {
        self.approvals.pending_approvals()
    }
}

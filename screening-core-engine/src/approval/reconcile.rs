use screening_core_api::{
    CustomerKey, CustomerType, PendingCustomer, ReconcileReport, ScreeningResult,
};
use screening_core_db::models::{Identifiable, Normalizable};
use screening_core_db::repository::{CustomerResolution, ScreeningBackend};
use std::collections::BTreeMap;
use tracing::{debug, info, info_span, warn, Instrument};
use uuid::Uuid;

use super::reconciler::PendingApprovalReconciler;

const CUSTOMER_TYPES: [CustomerType; 2] = [CustomerType::Individual, CustomerType::Company];

impl<B: ScreeningBackend> PendingApprovalReconciler<B> {
    /// Runs one reconciliation pass.
    ///
    /// Every pending customer is searched against the watchlist. Customers
    /// without hits are approved once; customers with hits replace the
    /// visible pending set. A failure on one customer is logged and the
    /// pass moves on; a rejected session aborts the pass.
    ///
    /// A pass requested while another is running is dropped and reports
    /// nothing.
    pub async fn reconcile(&self) -> ScreeningResult<ReconcileReport> {
        let Ok(_running) = self.pass_guard.try_lock() else {
            debug!("Reconciliation pass already running, request dropped");
            return Ok(ReconcileReport::default());
        };
        let pass_id = Uuid::new_v4();
        self.reconcile_pass()
            .instrument(info_span!("reconcile", %pass_id))
            .await
    }

    async fn reconcile_pass(&self) -> ScreeningResult<ReconcileReport> {
        let discovered = self.discover_pending().await?;
        let previous = self.pending.read().clone();

        let mut report = ReconcileReport::default();
        let mut next: BTreeMap<CustomerKey, PendingCustomer> = BTreeMap::new();

        for (key, mut customer) in discovered.customers {
            let hits = match self.backend.search_watchlist(&customer.name).await {
                Ok(hits) => hits,
                Err(e) if e.is_session_invalid() => return Err(e),
                Err(e) => {
                    warn!(customer = %key, error = %e, "Watchlist search failed");
                    report.failed.push(key);
                    if let Some(prior) = previous.get(&key) {
                        next.insert(key, prior.clone());
                    }
                    continue;
                }
            };

            let hit_count = hits.len();
            customer.matches = hits
                .into_iter()
                .filter_map(Normalizable::normalize)
                .map(|mut watchlist_match| {
                    if watchlist_match.name.is_empty() {
                        watchlist_match.name = customer.name.clone();
                    }
                    watchlist_match
                })
                .collect();
            if hit_count > 0 {
                if let Some(prior) = previous.get(&key) {
                    customer.processed_matches = prior.processed_matches.clone();
                }
                debug!(customer = %key, matches = customer.matches.len(), "Customer awaits decision");
                report.awaiting_decision.push(key);
                next.insert(key, customer);
                continue;
            }

            match self.backend.resolve_customer(key, CustomerResolution::Approve).await {
                Ok(()) => {
                    info!(customer = %key, name = %customer.name, "Auto-approved customer without watchlist matches");
                    report.auto_resolved.push(key);
                }
                Err(e) if e.is_session_invalid() => return Err(e),
                Err(e) => {
                    warn!(customer = %key, error = %e, "Auto-approval failed");
                    report.failed.push(key);
                }
            }
        }

        {
            let mut pending = self.pending.write();
            pending.retain(|key, _| !discovered.listed_types.contains(&key.customer_type));
            pending.extend(next);
        }

        if report.has_auto_resolutions() {
            if let Err(e) = self.synchronizer.synchronize_forced().await {
                warn!(error = %e, "Tracking refresh after auto-approval failed");
            }
        }

        info!(
            awaiting = report.awaiting_decision.len(),
            auto_resolved = report.auto_resolved.len(),
            failed = report.failed.len(),
            "Reconciliation pass finished"
        );
        Ok(report)
    }

    /// Lists pending customers of every type.
    ///
    /// A type whose listing fails keeps its previously visible customers.
    /// The pass only fails when no listing succeeded or the session was
    /// rejected.
    async fn discover_pending(&self) -> ScreeningResult<DiscoveredCustomers> {
        let mut discovered = DiscoveredCustomers::default();
        let mut last_error = None;

        for customer_type in CUSTOMER_TYPES {
            match self.backend.list_onboarding(customer_type).await {
                Ok(records) => {
                    discovered.listed_types.push(customer_type);
                    for record in records {
                        let (id, is_pending) = (record.id, record.is_pending());
                        match record.into_pending(customer_type) {
                            Some(customer) => {
                                discovered.customers.entry(customer.get_id()).or_insert(customer);
                            }
                            None if is_pending => {
                                warn!(%customer_type, id, "Skipping pending customer without a usable name");
                            }
                            None => {}
                        }
                    }
                }
                Err(e) if e.is_session_invalid() => return Err(e),
                Err(e) => {
                    warn!(%customer_type, error = %e, "Listing onboarding records failed");
                    last_error = Some(e);
                }
            }
        }

        match last_error {
            Some(e) if discovered.listed_types.is_empty() => Err(e),
            _ => Ok(discovered),
        }
    }
}

#[derive(Default)]
struct DiscoveredCustomers {
    listed_types: Vec<CustomerType>,
    customers: BTreeMap<CustomerKey, PendingCustomer>,
}

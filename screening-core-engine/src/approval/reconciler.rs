use parking_lot::RwLock;
use screening_core_api::{CustomerKey, MatchDecision, PendingCustomer, ScreeningError, ScreeningResult};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::tracking::TrackingSynchronizer;

/// Pending-approval workflow for newly onboarded customers.
///
/// Holds the set of matched customers still awaiting a human decision.
/// Approving or rejecting any single match resolves the whole customer;
/// sibling matches leave the view with it.
pub struct PendingApprovalReconciler<B> {
    pub(super) backend: Arc<B>,
    pub(super) synchronizer: Arc<TrackingSynchronizer<B>>,
    pub(super) pending: RwLock<BTreeMap<CustomerKey, PendingCustomer>>,
    /// Held for the duration of a reconciliation pass
    pub(super) pass_guard: Mutex<()>,
}

impl<B> PendingApprovalReconciler<B> {
    pub fn new(backend: Arc<B>, synchronizer: Arc<TrackingSynchronizer<B>>) -> Self {
        Self {
            backend,
            synchronizer,
            pending: RwLock::new(BTreeMap::new()),
            pass_guard: Mutex::new(()),
        }
    }

    /// Customers awaiting a decision, ordered by type then id
    pub fn pending_approvals(&self) -> Vec<PendingCustomer> {
        self.pending.read().values().cloned().collect()
    }

    pub fn pending_customer(&self, customer: CustomerKey) -> Option<PendingCustomer> {
        self.pending.read().get(&customer).cloned()
    }

    /// Records a per-match decision on a customer in the visible set.
    pub(super) fn mark_match(
        &self,
        customer: CustomerKey,
        match_id: i64,
        decision: MatchDecision,
    ) -> ScreeningResult<()> {
        let mut pending = self.pending.write();
        let entry = pending
            .get_mut(&customer)
            .ok_or_else(|| ScreeningError::CustomerNotFound(customer.to_string()))?;
        entry.processed_matches.insert(match_id, decision);
        Ok(())
    }

    pub(super) fn remove(&self, customer: CustomerKey) -> Option<PendingCustomer> {
        self.pending.write().remove(&customer)
    }
}

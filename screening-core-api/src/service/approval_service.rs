use async_trait::async_trait;

use crate::domain::{CustomerType, PendingCustomer, ReconcileReport};
use crate::error::ScreeningResult;

/// Pending-approval side of the screening engine.
#[async_trait]
pub trait PendingApprovalService: Send + Sync {
    /// Cross-reference pending onboarded customers against the watchlist,
    /// auto-approving the ones without matches.
    async fn reconcile(&self) -> ScreeningResult<ReconcileReport>;

    /// Approve one match, resolving the whole customer.
    async fn approve_match(
        &self,
        customer_type: CustomerType,
        customer_id: i64,
        match_id: i64,
        match_name: &str,
    ) -> ScreeningResult<()>;

    /// Reject one match, rejecting the whole customer.
    async fn reject_match(
        &self,
        customer_type: CustomerType,
        customer_id: i64,
        match_id: i64,
        match_name: &str,
    ) -> ScreeningResult<()>;

    /// Customers awaiting a human decision.
    fn pending_approvals(&self) -> Vec<PendingCustomer>;
}

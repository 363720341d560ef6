use screening_core_api::{CustomerKey, CustomerType, MatchDecision, ScreeningResult};
use screening_core_db::repository::{CustomerResolution, ScreeningBackend};
use tracing::{info, warn};

use super::reconciler::PendingApprovalReconciler;

impl<B: ScreeningBackend> PendingApprovalReconciler<B> {
    /// Confirms `match_id` as a true hit for the customer.
    ///
    /// Starts tracking `match_name`, tags the watchlist entry (best effort)
    /// and approves the customer. Once the approval is accepted the
    /// customer leaves the pending set, other matches included, and the
    /// tracking snapshot is refreshed.
    pub async fn approve_match(
        &self,
        customer_type: CustomerType,
        customer_id: i64,
        match_id: i64,
        match_name: &str,
    ) -> ScreeningResult<()> {
        let customer = CustomerKey {
            customer_type,
            id: customer_id,
        };
        self.mark_match(customer, match_id, MatchDecision::Approved)?;

        if let Err(e) = self.backend.set_tracking(match_name, true).await {
            warn!(%customer, match_id, error = %e, "Tracking the approved match failed");
            return Err(e);
        }

        if let Err(e) = self.backend.mark_matched(match_id).await {
            warn!(match_id, error = %e, "Tagging watchlist entry as matched failed");
        }

        if let Err(e) = self
            .backend
            .resolve_customer(customer, CustomerResolution::Approve)
            .await
        {
            warn!(%customer, error = %e, "Customer approval failed");
            return Err(e);
        }

        self.remove(customer);
        info!(%customer, match_id, match_name, "Customer approved on match");

        if let Err(e) = self.synchronizer.synchronize_forced().await {
            warn!(error = %e, "Tracking refresh after approval failed");
        }
        Ok(())
    }
}

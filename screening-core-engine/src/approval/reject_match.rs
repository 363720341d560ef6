use screening_core_api::{CustomerKey, CustomerType, MatchDecision, ScreeningResult};
use screening_core_db::repository::{CustomerResolution, ScreeningBackend};
use tracing::{info, warn};

use super::reconciler::PendingApprovalReconciler;

impl<B: ScreeningBackend> PendingApprovalReconciler<B> {
    /// Rejects the customer on account of `match_id`.
    ///
    /// The local mark is kept even when the remote rejection fails; the
    /// customer then stays pending with the match shown as rejected.
    pub async fn reject_match(
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
        self.mark_match(customer, match_id, MatchDecision::Rejected)?;

        if let Err(e) = self
            .backend
            .resolve_customer(customer, CustomerResolution::Reject)
            .await
        {
            warn!(%customer, match_id, error = %e, "Customer rejection failed");
            return Err(e);
        }

        self.remove(customer);
        info!(%customer, match_id, match_name, "Customer rejected on match");
        Ok(())
    }
}

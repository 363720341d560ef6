use async_trait::async_trait;
use screening_core_api::{CustomerKey, ScreeningResult};
use screening_core_db::repository::{CustomerResolution, ResolveCustomer};

use super::repo_impl::HttpScreeningBackend;

#[async_trait]
impl ResolveCustomer for HttpScreeningBackend {
    async fn resolve_customer(&self, customer: CustomerKey, resolution: CustomerResolution) -> ScreeningResult<()> {
        let id = customer.id.to_string();
        let url = self.endpoint(&[
            "customer",
            customer.customer_type.as_path_segment(),
            &id,
            resolution.as_path_segment(),
        ])?;
        self.send(self.client.post(url)).await?;
        Ok(())
    }
}

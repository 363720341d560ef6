use async_trait::async_trait;
use screening_core_api::{CustomerType, ScreeningResult};
use screening_core_db::models::OnboardingRecord;
use screening_core_db::repository::ListOnboarding;

use super::repo_impl::HttpScreeningBackend;

/// Listing path per customer type
pub fn onboarding_path(customer_type: CustomerType) -> &'static str {
    match customer_type {
        CustomerType::Individual => "individualob",
        CustomerType::Company => "companyob",
    }
}

#[async_trait]
impl ListOnboarding for HttpScreeningBackend {
    async fn list_onboarding(&self, customer_type: CustomerType) -> ScreeningResult<Vec<OnboardingRecord>> {
        let url = self.endpoint(&[onboarding_path(customer_type)])?;
        self.send_json(self.client.get(url)).await
    }
}

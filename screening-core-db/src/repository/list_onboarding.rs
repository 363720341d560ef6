use async_trait::async_trait;
use screening_core_api::{CustomerType, ScreeningResult};

use crate::models::onboarding_record::OnboardingRecord;

/// Repository trait for listing onboarding records of one customer type
#[async_trait]
pub trait ListOnboarding: Send + Sync {
    /// List every onboarding record of `customer_type`, resolved or not
    async fn list_onboarding(&self, customer_type: CustomerType) -> ScreeningResult<Vec<OnboardingRecord>>;
}

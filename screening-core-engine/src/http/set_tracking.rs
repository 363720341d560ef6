use async_trait::async_trait;
use reqwest::RequestBuilder;
use screening_core_api::ScreeningResult;
use screening_core_db::repository::SetTracking;
use serde_json::json;

use super::repo_impl::HttpScreeningBackend;

impl HttpScreeningBackend {
    pub(super) fn set_tracking_request(&self, name: &str, is_tracking: bool) -> ScreeningResult<RequestBuilder> {
        let url = self.endpoint(&["tracking", name])?;
        Ok(self.client.post(url).json(&json!({ "isTracking": is_tracking })))
    }
}

#[async_trait]
impl SetTracking for HttpScreeningBackend {
    async fn set_tracking(&self, name: &str, is_tracking: bool) -> ScreeningResult<()> {
        self.send(self.set_tracking_request(name, is_tracking)?).await?;
        Ok(())
    }
}

use async_trait::async_trait;
use reqwest::RequestBuilder;
use screening_core_api::ScreeningResult;
use screening_core_db::repository::{MarkMatched, MATCHED_DATASET};
use serde_json::json;

use super::repo_impl::HttpScreeningBackend;

impl HttpScreeningBackend {
    pub(super) fn mark_matched_request(&self, match_id: i64) -> ScreeningResult<RequestBuilder> {
        let id = match_id.to_string();
        let url = self.endpoint(&["mark-matched", &id])?;
        Ok(self.client.post(url).json(&json!({ "dataset": MATCHED_DATASET })))
    }
}

#[async_trait]
impl MarkMatched for HttpScreeningBackend {
    async fn mark_matched(&self, match_id: i64) -> ScreeningResult<()> {
        self.send(self.mark_matched_request(match_id)?).await?;
        Ok(())
    }
}

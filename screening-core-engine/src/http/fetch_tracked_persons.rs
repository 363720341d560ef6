use async_trait::async_trait;
use screening_core_api::ScreeningResult;
use screening_core_db::models::TrackedPersonRecord;
use screening_core_db::repository::FetchTrackedPersons;

use super::repo_impl::HttpScreeningBackend;

#[async_trait]
impl FetchTrackedPersons for HttpScreeningBackend {
    async fn fetch_tracked_persons(&self) -> ScreeningResult<Vec<TrackedPersonRecord>> {
        let url = self.endpoint(&["tracked-persons"])?;
        self.send_json(self.client.get(url)).await
    }
}

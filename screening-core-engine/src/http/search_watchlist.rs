use async_trait::async_trait;
use reqwest::RequestBuilder;
use screening_core_api::ScreeningResult;
use screening_core_db::models::{WatchlistHitRecord, WatchlistSearchResponse};
use screening_core_db::repository::SearchWatchlist;

use super::repo_impl::HttpScreeningBackend;

impl HttpScreeningBackend {
    pub(super) fn search_watchlist_request(&self, search_term: &str) -> ScreeningResult<RequestBuilder> {
        let url = self.endpoint(&["persons", "search"])?;
        Ok(self.client.get(url).query(&[("searchTerm", search_term)]))
    }
}

#[async_trait]
impl SearchWatchlist for HttpScreeningBackend {
    async fn search_watchlist(&self, search_term: &str) -> ScreeningResult<Vec<WatchlistHitRecord>> {
        let response: WatchlistSearchResponse = self
            .send_json(self.search_watchlist_request(search_term)?)
            .await?;
        Ok(response.into_hits())
    }
}

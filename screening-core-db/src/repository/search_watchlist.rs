use async_trait::async_trait;
use screening_core_api::ScreeningResult;

use crate::models::watchlist_hit_record::WatchlistHitRecord;

/// Repository trait for watchlist name search
#[async_trait]
pub trait SearchWatchlist: Send + Sync {
    /// Search the watchlist datasets for `search_term`
    ///
    /// # Returns
    /// * `Ok(Vec<WatchlistHitRecord>)` - possibly empty list of hits
    /// * `Err` - the search could not be executed
    async fn search_watchlist(&self, search_term: &str) -> ScreeningResult<Vec<WatchlistHitRecord>>;
}

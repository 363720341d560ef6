use async_trait::async_trait;
use screening_core_api::ScreeningResult;

/// Dataset tag written onto a watchlist entry confirmed as a customer match
pub const MATCHED_DATASET: &str = "matched";

/// Repository trait for annotating a watchlist entry as matched
#[async_trait]
pub trait MarkMatched: Send + Sync {
    /// Tag watchlist entry `match_id` with [`MATCHED_DATASET`]
    async fn mark_matched(&self, match_id: i64) -> ScreeningResult<()>;
}

use serde::{Deserialize, Serialize};

/// A watchlist search hit attached to the pending customer that found it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchlistMatch {
    pub id: i64,
    pub name: String,
    pub risk_level: u8,
    pub country: String,
    pub match_type: String,
}

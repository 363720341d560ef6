use screening_core_api::WatchlistMatch;
use serde::{Deserialize, Serialize};

use super::defaults::{deserialize_id, normalize_risk_level, text_or, DEFAULT_COUNTRY};
use super::normalizable::Normalizable;

/// One hit returned by `GET /persons/search`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistHitRecord {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub risk_level: Option<f64>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default, rename = "type")]
    pub match_type: Option<String>,
}

/// Search responses come either as a bare array or wrapped in `results`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum WatchlistSearchResponse {
    Bare(Vec<WatchlistHitRecord>),
    Wrapped { results: Vec<WatchlistHitRecord> },
}

impl WatchlistSearchResponse {
    pub fn into_hits(self) -> Vec<WatchlistHitRecord> {
        match self {
            WatchlistSearchResponse::Bare(hits) => hits,
            WatchlistSearchResponse::Wrapped { results } => results,
        }
    }
}

/// Every hit is a match. A hit without a usable name keeps an empty name
/// rather than being dropped.
impl Normalizable for WatchlistHitRecord {
    type Normalized = WatchlistMatch;

    fn normalize(self) -> Option<WatchlistMatch> {
        Some(WatchlistMatch {
            id: self.id,
            name: text_or(self.name, ""),
            risk_level: normalize_risk_level(self.risk_level),
            country: text_or(self.country, DEFAULT_COUNTRY),
            match_type: text_or(self.match_type, ""),
        })
    }
}

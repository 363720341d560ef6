use chrono::{DateTime, Utc};
use screening_core_api::{TrackedPerson, TrackingStatus};
use serde::{Deserialize, Serialize};

use super::defaults::{normalize_risk_level, text_or, DEFAULT_COUNTRY};
use super::normalizable::Normalizable;

/// Tracking flag as sent by the remote store: `1`/`0` or a boolean.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TrackingFlag {
    Numeric(i64),
    Boolean(bool),
}

impl TrackingFlag {
    /// Only an explicit `1` (or `true`) means tracking.
    pub fn is_set(&self) -> bool {
        match self {
            TrackingFlag::Numeric(value) => *value == 1,
            TrackingFlag::Boolean(value) => *value,
        }
    }
}

/// Wire record returned by `GET /tracked-persons`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedPersonRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub identifiers: Option<String>,
    #[serde(default)]
    pub risk_level: Option<f64>,
    #[serde(default)]
    pub sanction_dataset: Option<String>,
    #[serde(default)]
    pub is_tracking: Option<TrackingFlag>,
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub stop_date: Option<DateTime<Utc>>,
}

impl Normalizable for TrackedPersonRecord {
    type Normalized = (TrackedPerson, TrackingStatus);

    fn normalize(self) -> Option<Self::Normalized> {
        let name = self.name.map(|n| n.trim().to_string()).filter(|n| !n.is_empty())?;

        let status = TrackingStatus {
            is_tracking: self.is_tracking.map(|flag| flag.is_set()).unwrap_or(false),
            start_date: self.start_date,
            stop_date: self.stop_date,
        };
        let person = TrackedPerson {
            name,
            country: text_or(self.country, DEFAULT_COUNTRY),
            identifiers: text_or(self.identifiers, ""),
            risk_level: normalize_risk_level(self.risk_level),
            sanction_dataset: text_or(self.sanction_dataset, ""),
        };
        Some((person, status))
    }
}

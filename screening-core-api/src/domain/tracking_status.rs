use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Tracking state of one person, keyed by the same name as its
/// [`crate::TrackedPerson`].
///
/// While tracking, `stop_date` is cleared. Once tracking ends `stop_date`
/// holds the transition time and `start_date` is kept for aging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingStatus {
    pub is_tracking: bool,
    pub start_date: Option<DateTime<Utc>>,
    pub stop_date: Option<DateTime<Utc>>,
}

impl TrackingStatus {
    /// Status after tracking is (re)started at `now`.
    pub fn started(now: DateTime<Utc>) -> Self {
        TrackingStatus {
            is_tracking: true,
            start_date: Some(now),
            stop_date: None,
        }
    }

    /// Status after tracking is stopped at `now`, keeping the prior start date.
    pub fn stopped(prior: Option<&TrackingStatus>, now: DateTime<Utc>) -> Self {
        TrackingStatus {
            is_tracking: false,
            start_date: prior.and_then(|status| status.start_date),
            stop_date: Some(now),
        }
    }

    pub fn transition(prior: Option<&TrackingStatus>, desired_is_tracking: bool, now: DateTime<Utc>) -> Self {
        if desired_is_tracking {
            Self::started(now)
        } else {
            Self::stopped(prior, now)
        }
    }
}

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{TrackedPerson, TrackingStatus};

/// One published view of the authoritative tracked-person set.
///
/// An entry is only served while `now - fetched_at < ttl`; the cache
/// replaces it whole, never field by field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingCacheEntry {
    pub status_by_name: HashMap<String, TrackingStatus>,
    pub persons: Vec<TrackedPerson>,
    pub fetched_at: DateTime<Utc>,
    /// Content hash of `status_by_name` and `persons` as fetched
    /// - 0: entry rewritten locally (optimistic update), not comparable
    /// - Non-zero: fingerprint of the remote payload
    pub fingerprint: i64,
}

impl TrackingCacheEntry {
    pub fn is_fresh(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now - self.fetched_at < ttl
    }

    pub fn status(&self, name: &str) -> Option<&TrackingStatus> {
        self.status_by_name.get(name)
    }

    pub fn is_tracking(&self, name: &str) -> bool {
        self.status(name).map(|status| status.is_tracking).unwrap_or(false)
    }

    pub fn person(&self, name: &str) -> Option<&TrackedPerson> {
        self.persons.iter().find(|person| person.name == name)
    }

    /// Persons currently under tracking, in fetch order.
    pub fn tracked_persons(&self) -> impl Iterator<Item = &TrackedPerson> {
        self.persons.iter().filter(|person| self.is_tracking(&person.name))
    }
}

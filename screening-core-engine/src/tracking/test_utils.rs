use chrono::{DateTime, TimeZone, Utc};
use screening_core_api::{TrackedPerson, TrackingCacheEntry, TrackingStatus};
use std::collections::HashMap;

pub fn test_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 15, 9, 30, 0).unwrap()
}

pub fn create_test_person(name: &str) -> TrackedPerson {
    TrackedPerson {
        name: name.to_string(),
        country: "Unknown".to_string(),
        identifiers: format!("ID-{}", name.len()),
        risk_level: 50,
        sanction_dataset: "sanctions".to_string(),
    }
}

pub fn create_test_entry(fetched_at: DateTime<Utc>, statuses: &[(&str, bool)]) -> TrackingCacheEntry {
    let mut status_by_name = HashMap::new();
    let mut persons = Vec::new();
    for (name, is_tracking) in statuses {
        let status = if *is_tracking {
            TrackingStatus::started(fetched_at)
        } else {
            TrackingStatus::stopped(None, fetched_at)
        };
        status_by_name.insert(name.to_string(), status);
        persons.push(create_test_person(name));
    }
    TrackingCacheEntry {
        status_by_name,
        persons,
        fetched_at,
        fingerprint: 1,
    }
}

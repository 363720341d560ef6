use chrono::{DateTime, Utc};
use screening_core_api::{ScreeningResult, TrackingCacheEntry};
use std::collections::HashMap;
use tracing::warn;

use super::identifiable::Identifiable;
use super::normalizable::Normalizable;
use super::tracked_person_record::TrackedPersonRecord;
use crate::utils::snapshot_fingerprint;

/// Builds a cache entry from the authoritative tracked-person listing.
///
/// Records without a usable name are skipped. When the listing repeats a
/// name, the later record wins and the person keeps its first position.
pub fn build_cache_entry(
    records: Vec<TrackedPersonRecord>,
    fetched_at: DateTime<Utc>,
) -> ScreeningResult<TrackingCacheEntry> {
    let mut status_by_name = HashMap::with_capacity(records.len());
    let mut persons = Vec::with_capacity(records.len());
    let mut positions: HashMap<String, usize> = HashMap::with_capacity(records.len());
    let mut skipped = 0usize;

    for record in records {
        let Some((person, status)) = record.normalize() else {
            skipped += 1;
            continue;
        };
        let key = person.get_id();
        status_by_name.insert(key.clone(), status);
        match positions.get(&key) {
            Some(&position) => persons[position] = person,
            None => {
                positions.insert(key, persons.len());
                persons.push(person);
            }
        }
    }

    if skipped > 0 {
        warn!(skipped, "Skipped tracked-person records without a name");
    }

    let fingerprint = snapshot_fingerprint(&status_by_name, &persons)?;
    Ok(TrackingCacheEntry {
        status_by_name,
        persons,
        fetched_at,
        fingerprint,
    })
}

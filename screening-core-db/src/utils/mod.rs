use screening_core_api::{ScreeningError, TrackedPerson, TrackingStatus};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::hash::Hasher;
use twox_hash::XxHash64;

/// Hashes serializable data into an i64 using CBOR serialization and XxHash64.
///
/// Stable across runs for inputs with a deterministic serialization order;
/// hash maps must be converted to ordered maps first.
pub fn hash_as_i64<T: Serialize>(data: &T) -> Result<i64, ScreeningError> {
    let mut hasher = XxHash64::with_seed(0);
    let mut cbor = Vec::new();
    ciborium::ser::into_writer(data, &mut cbor)
        .map_err(|e| ScreeningError::MalformedPayload(format!("Failed to serialize data for hashing: {e}")))?;
    hasher.write(&cbor);
    Ok(hasher.finish() as i64)
}

/// Fingerprint of a tracked-person snapshot, independent of map iteration order.
pub fn snapshot_fingerprint(
    status_by_name: &HashMap<String, TrackingStatus>,
    persons: &[TrackedPerson],
) -> Result<i64, ScreeningError> {
    let ordered: BTreeMap<&String, &TrackingStatus> = status_by_name.iter().collect();
    hash_as_i64(&(ordered, persons))
}

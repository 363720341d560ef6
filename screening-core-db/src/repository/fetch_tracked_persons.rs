use async_trait::async_trait;
use screening_core_api::ScreeningResult;

use crate::models::tracked_person_record::TrackedPersonRecord;

/// Repository trait for reading the authoritative tracked-person listing
///
/// # Example
/// ```ignore
/// impl FetchTrackedPersons for HttpScreeningBackend {
///     async fn fetch_tracked_persons(&self) -> ScreeningResult<Vec<TrackedPersonRecord>> {
///         // GET /tracked-persons
///     }
/// }
/// ```
#[async_trait]
pub trait FetchTrackedPersons: Send + Sync {
    /// Fetch every tracked person with its tracking status
    ///
    /// # Returns
    /// * `Ok(Vec<TrackedPersonRecord>)` - raw records, not yet normalized
    /// * `Err(ScreeningError::Unauthorized)` - the session was rejected
    /// * `Err` - any other transport or decoding failure
    async fn fetch_tracked_persons(&self) -> ScreeningResult<Vec<TrackedPersonRecord>>;
}

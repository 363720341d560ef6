use async_trait::async_trait;
use screening_core_api::ScreeningResult;

/// Repository trait for switching tracking on or off for a named person
#[async_trait]
pub trait SetTracking: Send + Sync {
    /// Set the tracking flag of `name` on the remote store
    ///
    /// # Arguments
    /// * `name` - natural key of the person
    /// * `is_tracking` - desired state
    async fn set_tracking(&self, name: &str, is_tracking: bool) -> ScreeningResult<()>;
}

use serde::{Deserialize, Serialize};

/// Dataset tag carried by persons that entered tracking through onboarding
/// rather than through a watchlist hit.
pub const ONBOARDED_DATASET: &str = "onboarded";

/// Display record of a person under compliance tracking.
///
/// `name` is the natural key shared with [`crate::TrackingStatus`]; no
/// surrogate identifier is stable across datasets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedPerson {
    pub name: String,
    pub country: String,
    pub identifiers: String,
    /// Risk score in `0..=100`
    pub risk_level: u8,
    pub sanction_dataset: String,
}

impl TrackedPerson {
    pub fn is_onboarded(&self) -> bool {
        self.sanction_dataset == ONBOARDED_DATASET
    }
}

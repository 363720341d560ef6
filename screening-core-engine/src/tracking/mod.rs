pub mod cache;
pub mod governor;
pub mod synchronizer;
pub mod toggle;
#[cfg(test)]
pub mod test_utils;

pub use cache::TrackingCache;
pub use governor::{RefreshGovernor, RefreshReservation};
pub use synchronizer::TrackingSynchronizer;
pub use toggle::{AppliedToggle, OptimisticTrackingToggle};

pub mod defaults;
pub mod identifiable;
pub mod normalizable;
pub mod onboarding_record;
pub mod tracked_person_record;
pub mod tracking_snapshot;
pub mod watchlist_hit_record;

// Re-exports
pub use identifiable::*;
pub use normalizable::*;
pub use onboarding_record::*;
pub use tracked_person_record::*;
pub use tracking_snapshot::*;
pub use watchlist_hit_record::*;

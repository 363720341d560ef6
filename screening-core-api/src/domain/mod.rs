pub mod tracked_person;
pub mod tracking_status;
pub mod tracking_snapshot;
pub mod customer;
pub mod watchlist_match;
pub mod refresh_trigger;
pub mod reconcile_report;

pub use tracked_person::*;
pub use tracking_status::*;
pub use tracking_snapshot::*;
pub use customer::*;
pub use watchlist_match::*;
pub use refresh_trigger::*;
pub use reconcile_report::*;

//! Tracking and pending-approval reconciliation for the screening dashboard.
//!
//! [`ScreeningEngine`] keeps a time-boxed cache of the persons under
//! compliance tracking, reconciles it against the remote store behind a
//! shared refresh cooldown, applies tracking changes optimistically, and
//! cross-references newly onboarded customers against the watchlist.

pub mod approval;
pub mod config;
pub mod engine;
pub mod factory;
pub mod http;
pub mod poller;
pub mod tracking;

pub use config::EngineConfig;
pub use engine::ScreeningEngine;
pub use factory::ScreeningEngineFactory;
pub use http::HttpScreeningBackend;
pub use poller::TrackingPoller;

#[cfg(test)]
pub mod test_helper;

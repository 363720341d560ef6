pub mod clock;
pub mod tracking_service;
pub mod approval_service;

pub use clock::*;
pub use tracking_service::*;
pub use approval_service::*;

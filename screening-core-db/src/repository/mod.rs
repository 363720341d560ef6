pub mod fetch_tracked_persons;
pub mod set_tracking;
pub mod list_onboarding;
pub mod search_watchlist;
pub mod resolve_customer;
pub mod mark_matched;

// Re-exports
pub use fetch_tracked_persons::*;
pub use set_tracking::*;
pub use list_onboarding::*;
pub use search_watchlist::*;
pub use resolve_customer::*;
pub use mark_matched::*;

/// Every remote operation the screening engine depends on
pub trait ScreeningBackend:
    FetchTrackedPersons + SetTracking + ListOnboarding + SearchWatchlist + ResolveCustomer + MarkMatched
{
}

impl<T> ScreeningBackend for T where
    T: FetchTrackedPersons + SetTracking + ListOnboarding + SearchWatchlist + ResolveCustomer + MarkMatched
{
}

pub mod repo_impl;
pub mod fetch_tracked_persons;
pub mod set_tracking;
pub mod list_onboarding;
pub mod search_watchlist;
pub mod resolve_customer;
pub mod mark_matched;

#[cfg(test)]
pub mod test_utils;

pub use repo_impl::HttpScreeningBackend;

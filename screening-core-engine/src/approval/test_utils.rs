use screening_core_api::{CustomerKey, CustomerType};

use crate::test_helper::InMemoryBackend;

pub fn individual(id: i64) -> CustomerKey {
    CustomerKey {
        customer_type: CustomerType::Individual,
        id,
    }
}

/// Pending individual whose name has no watchlist hit
pub fn seed_unmatched_customer(backend: &InMemoryBackend, id: i64, name: &str) {
    backend.seed_onboarding(CustomerType::Individual, id, name, None);
}

/// Pending individual with one high-risk watchlist hit under the same name
pub fn seed_ambiguous_customer(backend: &InMemoryBackend, id: i64, name: &str, match_id: i64) {
    backend.seed_onboarding(CustomerType::Individual, id, name, Some("pending"));
    backend.seed_watchlist_hit(name, match_id, name, 90.0);
}

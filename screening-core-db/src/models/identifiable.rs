use screening_core_api::{CustomerKey, PendingCustomer, TrackedPerson};
use std::hash::Hash;

/// Trait for records that carry a natural key
pub trait Identifiable {
    type Id: Eq + Hash + Clone;

    /// Returns the key the record is reconciled on
    fn get_id(&self) -> Self::Id;
}

impl Identifiable for TrackedPerson {
    type Id = String;

    fn get_id(&self) -> String {
        self.name.clone()
    }
}

impl Identifiable for PendingCustomer {
    type Id = CustomerKey;

    fn get_id(&self) -> CustomerKey {
        self.key()
    }
}

use screening_core_api::{CustomerStatus, CustomerType, PendingCustomer};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::defaults::deserialize_id;

/// Onboarding record as listed by `GET /individualob` and `GET /companyob`.
///
/// Individuals may carry split first/last names, companies a
/// `companyName`; `name` wins when present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingRecord {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl OnboardingRecord {
    /// Name searched against the watchlist
    pub fn display_name(&self) -> Option<String> {
        let non_blank = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        non_blank(&self.name)
            .or_else(|| non_blank(&self.full_name))
            .or_else(|| non_blank(&self.company_name))
            .or_else(|| {
                let parts: Vec<String> = [non_blank(&self.first_name), non_blank(&self.last_name)]
                    .into_iter()
                    .flatten()
                    .collect();
                (!parts.is_empty()).then(|| parts.join(" "))
            })
    }

    pub fn resolution_status(&self) -> Option<CustomerStatus> {
        CustomerStatus::from_remote(self.status.as_deref())
    }

    pub fn is_pending(&self) -> bool {
        self.resolution_status() == Some(CustomerStatus::Pending)
    }

    /// Converts a pending record into an unchecked [`PendingCustomer`].
    ///
    /// Returns `None` for resolved records and records without a name.
    pub fn into_pending(self, customer_type: CustomerType) -> Option<PendingCustomer> {
        if !self.is_pending() {
            return None;
        }
        let name = self.display_name()?;
        Some(PendingCustomer {
            id: self.id,
            customer_type,
            name,
            status: CustomerStatus::Pending,
            matches: Vec::new(),
            processed_matches: HashMap::new(),
        })
    }
}

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

use super::WatchlistMatch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerType {
    Individual,
    Company,
}

impl CustomerType {
    /// Path segment used by the customer resolution endpoints
    pub fn as_path_segment(&self) -> &'static str {
        match self {
            CustomerType::Individual => "individual",
            CustomerType::Company => "company",
        }
    }
}

impl std::fmt::Display for CustomerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_path_segment())
    }
}

impl FromStr for CustomerType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "individual" => Ok(CustomerType::Individual),
            "company" => Ok(CustomerType::Company),
            _ => Err(()),
        }
    }
}

/// Server-side resolution status of an onboarded customer.
///
/// An unset or empty remote status is read as `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CustomerStatus {
    Pending,
    Approved,
    Rejected,
}

impl CustomerStatus {
    pub fn from_remote(raw: Option<&str>) -> Option<Self> {
        let raw = raw.map(str::trim).unwrap_or_default();
        if raw.is_empty() {
            return Some(CustomerStatus::Pending);
        }
        raw.to_ascii_lowercase().parse().ok()
    }
}

impl FromStr for CustomerStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(CustomerStatus::Pending),
            "approved" => Ok(CustomerStatus::Approved),
            "rejected" => Ok(CustomerStatus::Rejected),
            _ => Err(()),
        }
    }
}

/// Identity of a pending customer; ids are only unique per customer type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CustomerKey {
    pub customer_type: CustomerType,
    pub id: i64,
}

impl std::fmt::Display for CustomerKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.customer_type, self.id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchDecision {
    Approved,
    Rejected,
}

/// Newly onboarded individual or company awaiting resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingCustomer {
    pub id: i64,
    pub customer_type: CustomerType,
    pub name: String,
    pub status: CustomerStatus,
    pub matches: Vec<WatchlistMatch>,
    /// Decisions taken in this session, keyed by watchlist match id.
    /// Matches absent from the map are unprocessed.
    pub processed_matches: HashMap<i64, MatchDecision>,
}

impl PendingCustomer {
    pub fn key(&self) -> CustomerKey {
        CustomerKey {
            customer_type: self.customer_type,
            id: self.id,
        }
    }

    pub fn is_matched(&self) -> bool {
        !self.matches.is_empty()
    }

    pub fn decision(&self, match_id: i64) -> Option<MatchDecision> {
        self.processed_matches.get(&match_id).copied()
    }

    pub fn unprocessed_matches(&self) -> impl Iterator<Item = &WatchlistMatch> {
        self.matches
            .iter()
            .filter(|m| !self.processed_matches.contains_key(&m.id))
    }
}

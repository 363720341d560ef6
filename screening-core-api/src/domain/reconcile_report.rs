use serde::{Deserialize, Serialize};

use super::CustomerKey;

/// Outcome of one reconciliation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconcileReport {
    /// Customers left awaiting a human decision
    pub awaiting_decision: Vec<CustomerKey>,
    /// Zero-match customers approved automatically
    pub auto_resolved: Vec<CustomerKey>,
    /// Customers whose search or auto-approval failed this pass
    pub failed: Vec<CustomerKey>,
}

impl ReconcileReport {
    pub fn has_auto_resolutions(&self) -> bool {
        !self.auto_resolved.is_empty()
    }
}

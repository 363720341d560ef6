use async_trait::async_trait;
use screening_core_api::{CustomerKey, ScreeningResult};

/// Customer-level resolution sent to the remote store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerResolution {
    /// Approve the customer; the remote store adds it to tracking
    Approve,
    Reject,
}

impl CustomerResolution {
    pub fn as_path_segment(&self) -> &'static str {
        match self {
            CustomerResolution::Approve => "approve",
            CustomerResolution::Reject => "reject",
        }
    }
}

impl std::fmt::Display for CustomerResolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_path_segment())
    }
}

/// Repository trait for approving or rejecting a pending customer
#[async_trait]
pub trait ResolveCustomer: Send + Sync {
    async fn resolve_customer(&self, customer: CustomerKey, resolution: CustomerResolution) -> ScreeningResult<()>;
}

pub mod reconciler;
pub mod reconcile;
pub mod approve_match;
pub mod reject_match;
#[cfg(test)]
pub mod test_utils;

pub use reconciler::PendingApprovalReconciler;

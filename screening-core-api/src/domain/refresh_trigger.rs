use serde::{Deserialize, Serialize};

/// Origin of a refresh request. Every trigger shares one cooldown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RefreshTrigger {
    /// Periodic poll
    Timer,
    /// User switched to the screening view
    TabSwitch,
    /// Page opened with a refresh request in its URL parameters
    UrlParameter,
    /// Redirect after a customer was onboarded
    PostOnboarding,
    /// Explicit user refresh
    Manual,
}

impl RefreshTrigger {
    /// Whether this trigger may have new onboarded customers behind it.
    pub fn carries_onboarding_intent(&self) -> bool {
        matches!(
            self,
            RefreshTrigger::Timer | RefreshTrigger::UrlParameter | RefreshTrigger::PostOnboarding
        )
    }
}

impl std::fmt::Display for RefreshTrigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RefreshTrigger::Timer => write!(f, "Timer"),
            RefreshTrigger::TabSwitch => write!(f, "TabSwitch"),
            RefreshTrigger::UrlParameter => write!(f, "UrlParameter"),
            RefreshTrigger::PostOnboarding => write!(f, "PostOnboarding"),
            RefreshTrigger::Manual => write!(f, "Manual"),
        }
    }
}

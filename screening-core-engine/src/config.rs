use screening_core_api::{ScreeningError, ScreeningResult};
use std::{env, fmt::Display, str::FromStr, time::Duration as StdDuration};
use tracing::{info, warn};
use validator::Validate;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_CACHE_TTL_SECS: u64 = 120;
pub const DEFAULT_REFRESH_COOLDOWN_MS: u64 = 3_000;
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 120;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct EngineConfig {
    #[validate(url)]
    pub base_url: String,
    /// Bearer token sent with every request
    pub session_token: Option<String>,
    #[validate(range(min = 1))]
    pub cache_ttl_secs: u64,
    #[validate(range(min = 1))]
    pub refresh_cooldown_ms: u64,
    #[validate(range(min = 1))]
    pub poll_interval_secs: u64,
    #[validate(range(min = 1))]
    pub request_timeout_secs: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            session_token: None,
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
            refresh_cooldown_ms: DEFAULT_REFRESH_COOLDOWN_MS,
            poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl EngineConfig {
    /// Reads `SCREENING_*` variables, falling back to defaults for unset ones.
    pub fn from_env() -> ScreeningResult<Self> {
        let config = Self {
            base_url: try_load("SCREENING_BASE_URL", DEFAULT_BASE_URL)?,
            session_token: var("SCREENING_SESSION_TOKEN").ok().filter(|t| !t.trim().is_empty()),
            cache_ttl_secs: try_load("SCREENING_CACHE_TTL_SECS", &DEFAULT_CACHE_TTL_SECS.to_string())?,
            refresh_cooldown_ms: try_load(
                "SCREENING_REFRESH_COOLDOWN_MS",
                &DEFAULT_REFRESH_COOLDOWN_MS.to_string(),
            )?,
            poll_interval_secs: try_load(
                "SCREENING_POLL_INTERVAL_SECS",
                &DEFAULT_POLL_INTERVAL_SECS.to_string(),
            )?,
            request_timeout_secs: try_load(
                "SCREENING_REQUEST_TIMEOUT_SECS",
                &DEFAULT_REQUEST_TIMEOUT_SECS.to_string(),
            )?,
        };
        config.validated()
    }

    pub fn validated(self) -> ScreeningResult<Self> {
        self.validate()
            .map_err(|e| ScreeningError::Configuration(e.to_string()))?;
        Ok(self)
    }

    pub fn cache_ttl(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.cache_ttl_secs as i64)
    }

    pub fn refresh_cooldown(&self) -> chrono::Duration {
        chrono::Duration::milliseconds(self.refresh_cooldown_ms as i64)
    }

    pub fn poll_interval(&self) -> StdDuration {
        StdDuration::from_secs(self.poll_interval_secs)
    }

    pub fn request_timeout(&self) -> StdDuration {
        StdDuration::from_secs(self.request_timeout_secs)
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| ())
}

fn try_load<T: FromStr>(key: &str, default: &str) -> ScreeningResult<T>
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
            ScreeningError::Configuration(format!("Invalid {key} value: {e}"))
        })
}

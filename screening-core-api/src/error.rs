use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScreeningError {
    #[error("Transport error{}: {message}", status_suffix(.status))]
    Transport {
        status: Option<u16>,
        message: String,
    },

    #[error("Session is no longer valid")]
    Unauthorized,

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Tracking cache must be synchronized before it can be modified")]
    CachePrimingRequired,

    #[error("Pending customer not found: {0}")]
    CustomerNotFound(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ScreeningError {
    pub fn transport(message: impl Into<String>) -> Self {
        ScreeningError::Transport {
            status: None,
            message: message.into(),
        }
    }

    /// True when the remote store rejected the session credentials.
    ///
    /// Callers are expected to send the user back to re-authentication;
    /// the engine never retries these.
    pub fn is_session_invalid(&self) -> bool {
        matches!(self, ScreeningError::Unauthorized)
    }
}

fn status_suffix(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!(" (HTTP {code})"),
        None => String::new(),
    }
}

pub type ScreeningResult<T> = Result<T, ScreeningError>;

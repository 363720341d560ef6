use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use screening_core_api::{ScreeningError, ScreeningResult};
use serde::de::DeserializeOwned;

use crate::config::EngineConfig;

/// Remote screening store reached over its REST API.
pub struct HttpScreeningBackend {
    pub client: Client,
    pub base_url: Url,
    session_token: Option<String>,
}

impl HttpScreeningBackend {
    pub fn new(config: &EngineConfig) -> ScreeningResult<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ScreeningError::Configuration(format!("Invalid base URL: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ScreeningError::Configuration(format!(
                "Base URL cannot carry paths: {base_url}"
            )));
        }

        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| ScreeningError::Configuration(format!("HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url,
            session_token: config.session_token.clone(),
        })
    }

    /// Joins percent-encoded `segments` onto the base URL.
    pub fn endpoint(&self, segments: &[&str]) -> ScreeningResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ScreeningError::Configuration(format!("Base URL cannot carry paths: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Attaches credentials, sends, and maps the status to an error.
    pub(super) async fn send(&self, request: RequestBuilder) -> ScreeningResult<Response> {
        let request = match &self.session_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };
        let response = request
            .send()
            .await
            .map_err(|e| ScreeningError::transport(e.to_string()))?;
        check_status(response.status())?;
        Ok(response)
    }

    pub(super) async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> ScreeningResult<T> {
        self.send(request)
            .await?
            .json::<T>()
            .await
            .map_err(|e| ScreeningError::MalformedPayload(e.to_string()))
    }
}

/// `401` is the session-invalid signal; any other non-success status is a
/// transport failure.
pub fn check_status(status: StatusCode) -> ScreeningResult<()> {
    if status == StatusCode::UNAUTHORIZED {
        return Err(ScreeningError::Unauthorized);
    }
    if !status.is_success() {
        return Err(ScreeningError::Transport {
            status: Some(status.as_u16()),
            message: status.canonical_reason().unwrap_or("Unexpected status").to_string(),
        });
    }
    Ok(())
}

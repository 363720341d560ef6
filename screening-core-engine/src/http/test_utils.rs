use reqwest::Request;
use serde_json::Value;

use crate::config::EngineConfig;

use super::repo_impl::HttpScreeningBackend;

pub fn create_test_backend() -> HttpScreeningBackend {
    let config = EngineConfig {
        base_url: "https://screening.example.com/api/".to_string(),
        ..EngineConfig::default()
    };
    HttpScreeningBackend::new(&config).expect("backend")
}

/// Parses the buffered JSON body of a built request
pub fn json_body(request: &Request) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
    let bytes = request
        .body()
        .and_then(|body| body.as_bytes())
        .ok_or("request has no buffered body")?;
    Ok(serde_json::from_slice(bytes)?)
}

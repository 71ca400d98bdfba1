//! Client for the Render hosting API
//!
//! The /services route is pure pass-through: authenticate, forward one GET,
//! relay the JSON. The handler decides how failures surface.

use serde_json::Value;

/// Production Render API base URL.
pub const RENDER_API_URL: &str = "https://api.render.com/v1";

/// Render API error type
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("render api key is not configured")]
    MissingApiKey,

    #[error("render api request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Minimal Render API client.
#[derive(Debug, Clone)]
pub struct RenderClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl RenderClient {
    /// Client against the production Render API.
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_base_url(RENDER_API_URL, api_key)
    }

    /// Client against a custom base URL. Tests point this at a local
    /// stand-in upstream.
    pub fn with_base_url(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key,
        }
    }

    /// GET /services on the Render API, returning the upstream JSON verbatim.
    ///
    /// Non-2xx upstream responses are errors.
    pub async fn list_services(&self) -> Result<Value, RenderError> {
        let api_key = self.api_key.as_deref().ok_or(RenderError::MissingApiKey)?;

        let response = self
            .http
            .get(format!("{}/services", self.base_url))
            .bearer_auth(api_key)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_api_key_is_an_error() {
        let client = RenderClient::new(None);
        let err = client.list_services().await.unwrap_err();
        assert!(matches!(err, RenderError::MissingApiKey));
    }

    #[tokio::test]
    async fn unreachable_upstream_is_an_error() {
        // Port 9 (discard) refuses connections
        let client = RenderClient::with_base_url("http://127.0.0.1:9", Some("key".into()));
        let err = client.list_services().await.unwrap_err();
        assert!(matches!(err, RenderError::Http(_)));
    }
}

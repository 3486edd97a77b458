//! HTTP backend struct, URL building, and response decoding.

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::ChatError;

use super::config::BackendConfig;

pub(crate) const API_KEY_HEADER: &str = "x-api-key";

/// Longest slice of an error body kept for logs.
const ERROR_BODY_LIMIT: usize = 200;

/// Client for the assistant HTTP API.
pub struct HttpBackend {
    pub(crate) config: BackendConfig,
    pub(crate) base: Url,
    pub(crate) headers: HeaderMap,
    pub(crate) http: reqwest::Client,
}

impl HttpBackend {
    pub fn new(config: BackendConfig) -> Result<Self, ChatError> {
        let base = Url::parse(config.base_url.trim())
            .map_err(|e| ChatError::InvalidConfig(format!("base URL {:?}: {e}", config.base_url)))?;
        if !matches!(base.scheme(), "http" | "https") || base.cannot_be_a_base() {
            return Err(ChatError::InvalidConfig(format!(
                "base URL {:?} must be an http(s) URL",
                config.base_url
            )));
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(ref key) = config.api_key {
            let mut value = HeaderValue::from_str(key)
                .map_err(|_| ChatError::InvalidConfig("API key is not a valid header value".into()))?;
            value.set_sensitive(true);
            headers.insert(API_KEY_HEADER, value);
        }

        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .build()
            .map_err(|e| ChatError::InvalidConfig(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            config,
            base,
            headers,
            http,
        })
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    /// Append path segments to the base URL, keeping any base path prefix.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Turn a non-success status into the matching error.
    pub(crate) async fn check_status(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ChatError> {
        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ChatError::RateLimited);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let body = text.chars().take(ERROR_BODY_LIMIT).collect::<String>();
            return Err(ChatError::Http {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Read the whole body and decode it as JSON.
    pub(crate) async fn decode<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ChatError> {
        let text = response.text().await.map_err(transport_error)?;
        serde_json::from_str(&text).map_err(|e| ChatError::ParseError(e.to_string()))
    }
}

pub(crate) fn transport_error(e: reqwest::Error) -> ChatError {
    if e.is_timeout() {
        ChatError::Timeout
    } else {
        ChatError::NetworkError(e.to_string())
    }
}

//! HTTP client for the keyword-data provider REST API.
//!
//! Wraps `reqwest` with provider-specific error handling, API key
//! management, typed response deserialization, and retry on transient
//! failures. All endpoints check the `"status"` field in the JSON envelope
//! and surface API-level errors as [`ProviderError::ApiError`].

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::ProviderError;
use crate::retry::retry_with_backoff;
use crate::types::{
    ApiResponse, RankedKeywordEntry, RankedKeywordsResponse, SearchVolumeEntry,
    SearchVolumeResponse,
};

const DEFAULT_BASE_URL: &str = "https://api.keywardly.io/v1/";
const DEFAULT_MAX_RETRIES: u32 = 3;
const DEFAULT_BACKOFF_BASE_MS: u64 = 1_000;

/// Client for the keyword-data provider API.
///
/// Manages the HTTP client, API key, base URL, and retry policy. Use
/// [`KeywordApiClient::new`] for production or
/// [`KeywordApiClient::with_base_url`] to point at a mock server in tests.
pub struct KeywordApiClient {
    client: Client,
    api_key: String,
    base_url: Url,
    max_retries: u32,
    backoff_base_ms: u64,
}

impl KeywordApiClient {
    /// Creates a new client pointed at the production provider API.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, ProviderError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ProviderError::ApiError`] if `base_url`
    /// is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("brandlens/0.1 (visibility-reporting)")
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // query_pairs_mut writes to the root path rather than replacing the
        // last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| ProviderError::ApiError(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
            max_retries: DEFAULT_MAX_RETRIES,
            backoff_base_ms: DEFAULT_BACKOFF_BASE_MS,
        })
    }

    /// Overrides the transient-failure retry policy.
    #[must_use]
    pub fn with_retry_policy(mut self, max_retries: u32, backoff_base_ms: u64) -> Self {
        self.max_retries = max_retries;
        self.backoff_base_ms = backoff_base_ms;
        self
    }

    /// Fetches monthly search volumes for a set of keywords.
    ///
    /// Calls the `searchVolume` endpoint with the keywords as one
    /// comma-separated parameter. The provider echoes one entry per known
    /// keyword; unknown keywords are simply absent from the results.
    ///
    /// # Errors
    ///
    /// - [`ProviderError::ApiError`] if the API returns an error status.
    /// - [`ProviderError::Http`] on network failure or non-2xx HTTP status.
    /// - [`ProviderError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn search_volume(
        &self,
        keywords: &[String],
    ) -> Result<Vec<SearchVolumeEntry>, ProviderError> {
        let joined = keywords.join(",");
        let url = self.build_url("searchVolume", &[("keywords", &joined)]);
        let body = self.request_json(&url).await?;
        Self::check_api_error(&body)?;

        let envelope: ApiResponse<SearchVolumeResponse> =
            serde_json::from_value(body).map_err(|e| ProviderError::Deserialize {
                context: format!("searchVolume(keywords={})", keywords.len()),
                source: e,
            })?;

        Ok(envelope.data.results)
    }

    /// Fetches the organic rankings a domain holds, with their volumes.
    ///
    /// Calls the `rankedKeywords` endpoint; `limit` caps how many rankings
    /// the provider returns, best positions first.
    ///
    /// # Errors
    ///
    /// - [`ProviderError::ApiError`] if the API returns an error status.
    /// - [`ProviderError::Http`] on network failure or non-2xx HTTP status.
    /// - [`ProviderError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn ranked_keywords(
        &self,
        domain: &str,
        limit: u32,
    ) -> Result<Vec<RankedKeywordEntry>, ProviderError> {
        let limit_str = limit.to_string();
        let url = self.build_url("rankedKeywords", &[("domain", domain), ("limit", &limit_str)]);
        let body = self.request_json(&url).await?;
        Self::check_api_error(&body)?;

        let envelope: ApiResponse<RankedKeywordsResponse> =
            serde_json::from_value(body).map_err(|e| ProviderError::Deserialize {
                context: format!("rankedKeywords(domain={domain})"),
                source: e,
            })?;

        Ok(envelope.data.results)
    }

    /// Builds the full request URL with properly percent-encoded query
    /// parameters.
    fn build_url(&self, op: &str, extra: &[(&str, &str)]) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("key", &self.api_key);
            pairs.append_pair("op", op);
            for (k, v) in extra {
                pairs.append_pair(k, v);
            }
        }
        url
    }

    /// Sends a GET request with retry on transient failures, asserts a 2xx
    /// HTTP status, and parses the response body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Http`] on network failure or a non-2xx
    /// status after retries are exhausted, or [`ProviderError::Deserialize`]
    /// if the body is not valid JSON.
    async fn request_json(&self, url: &Url) -> Result<serde_json::Value, ProviderError> {
        retry_with_backoff(self.max_retries, self.backoff_base_ms, || {
            let url = url.clone();
            async move {
                let response = self.client.get(url.clone()).send().await?;
                let response = response.error_for_status()?;
                let body = response.text().await?;
                serde_json::from_str(&body).map_err(|e| ProviderError::Deserialize {
                    context: url.to_string(),
                    source: e,
                })
            }
        })
        .await
    }

    /// Checks the top-level `"status"` field and returns an error if it
    /// indicates failure.
    fn check_api_error(body: &serde_json::Value) -> Result<(), ProviderError> {
        if body.get("status").and_then(serde_json::Value::as_str) == Some("ERROR") {
            let msg = body
                .get("message")
                .and_then(serde_json::Value::as_str)
                .unwrap_or("unknown error")
                .to_string();
            return Err(ProviderError::ApiError(msg));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(base_url: &str) -> KeywordApiClient {
        KeywordApiClient::with_base_url("test-key", 30, base_url)
            .expect("client construction should not fail")
    }

    #[test]
    fn build_url_constructs_correct_query_string() {
        let client = test_client("https://api.keywardly.io/v1");
        let url = client.build_url("rankedKeywords", &[("domain", "lavera.de"), ("limit", "100")]);
        assert_eq!(
            url.as_str(),
            "https://api.keywardly.io/v1/?key=test-key&op=rankedKeywords&domain=lavera.de&limit=100"
        );
    }

    #[test]
    fn build_url_strips_trailing_slash() {
        let client = test_client("https://api.keywardly.io/v1/");
        let url = client.build_url("searchVolume", &[("keywords", "lavera")]);
        assert_eq!(
            url.as_str(),
            "https://api.keywardly.io/v1/?key=test-key&op=searchVolume&keywords=lavera"
        );
    }

    #[test]
    fn build_url_encodes_special_characters() {
        let client = test_client("https://api.keywardly.io/v1");
        let url = client.build_url("searchVolume", &[("keywords", "lavera shampoo,weleda öl")]);
        assert!(
            !url.as_str().contains(' '),
            "query params must be percent-encoded: {url}"
        );
    }

    #[test]
    fn check_api_error_passes_ok_envelope() {
        let body = serde_json::json!({"status": "OK", "results": []});
        assert!(KeywordApiClient::check_api_error(&body).is_ok());
    }

    #[test]
    fn check_api_error_surfaces_provider_message() {
        let body = serde_json::json!({"status": "ERROR", "message": "invalid api key"});
        let err = KeywordApiClient::check_api_error(&body).unwrap_err();
        assert!(matches!(err, ProviderError::ApiError(ref m) if m == "invalid api key"));
    }
}

use thiserror::Error;

/// Errors returned by the keyword-data provider client.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider returned `"status": "ERROR"` with a message.
    #[error("keyword API error: {0}")]
    ApiError(String),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// A wire record failed validation at the normalization boundary.
    #[error("normalization error: {0}")]
    Normalization(String),
}

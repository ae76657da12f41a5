use thiserror::Error;

/// Errors returned by the recommendation client.
///
/// Upstream HTTP error statuses are deliberately absent: the upstream body is
/// relayed to the caller whatever its status.
#[derive(Debug, Error)]
pub enum RecommendError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },

    /// The upstream body was not JSON.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

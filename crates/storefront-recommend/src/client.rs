//! HTTP client for the upstream prediction endpoint.
//!
//! One call per request: no retry, no request timeout, no caching. Upstream
//! error statuses are not turned into errors; the JSON body is handed back
//! as-is so the proxy route can relay it.

use reqwest::{header, Client, Url};

use storefront_core::AppConfig;

use crate::error::RecommendError;
use crate::types::PredictRequest;

const PLACEMENT_PATH: [&str; 8] = [
    "locations",
    "global",
    "catalogs",
    "default_catalog",
    "eventStores",
    "default_event_store",
    "placements",
    "recently_viewed_default:predict",
];

/// Raw upstream answer: the HTTP status and the untouched JSON body.
#[derive(Debug, Clone)]
pub struct Prediction {
    pub status: u16,
    pub body: serde_json::Value,
}

impl Prediction {
    #[must_use]
    pub fn is_upstream_error(&self) -> bool {
        self.status >= 400
    }
}

/// Client for the upstream prediction API.
///
/// Credentials are injected at construction and never leave the server.
pub struct RecommendClient {
    client: Client,
    base_url: Url,
    project_number: String,
    api_key: String,
}

impl std::fmt::Debug for RecommendClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecommendClient")
            .field("base_url", &self.base_url.as_str())
            .field("project_number", &self.project_number)
            .field("api_key", &"[redacted]")
            .finish_non_exhaustive()
    }
}

impl RecommendClient {
    /// Creates a client from the application configuration.
    ///
    /// # Errors
    ///
    /// See [`RecommendClient::with_base_url`].
    pub fn from_config(config: &AppConfig) -> Result<Self, RecommendError> {
        Self::with_base_url(
            &config.recommend_project_number,
            &config.recommend_api_key,
            &config.recommend_user_agent,
            &config.recommend_base_url,
        )
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`RecommendError::Http`] if the `reqwest::Client` cannot be
    /// built, or [`RecommendError::InvalidBaseUrl`] if `base_url` is not an
    /// absolute hierarchical URL.
    pub fn with_base_url(
        project_number: &str,
        api_key: &str,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, RecommendError> {
        let client = Client::builder().user_agent(user_agent).build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| RecommendError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(RecommendError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: "URL cannot be used as a base".to_owned(),
            });
        }

        Ok(Self {
            client,
            base_url: parsed,
            project_number: project_number.to_owned(),
            api_key: api_key.to_owned(),
        })
    }

    /// Sends a `detail-page-view` event for `sku` and returns the upstream
    /// answer, whatever its status.
    ///
    /// # Errors
    ///
    /// - [`RecommendError::Http`] on network failure.
    /// - [`RecommendError::Deserialize`] if the upstream body is not JSON.
    pub async fn predict(&self, sku: &str, visitor_id: &str) -> Result<Prediction, RecommendError> {
        let url = self.predict_url();
        let request = PredictRequest::detail_page_view(sku, visitor_id);

        let response = self
            .client
            .post(url)
            .header("user", &self.api_key)
            .header(header::CONTENT_TYPE, "application/json; charset=utf-8")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        let body = serde_json::from_str(&text).map_err(|e| RecommendError::Deserialize {
            context: format!("predict response for sku {sku} (status {})", status.as_u16()),
            source: e,
        })?;

        if status.is_success() {
            tracing::debug!(sku, status = status.as_u16(), "prediction received");
        } else {
            tracing::warn!(
                sku,
                status = status.as_u16(),
                "prediction endpoint returned an error; relaying body as-is"
            );
        }

        Ok(Prediction {
            status: status.as_u16(),
            body,
        })
    }

    /// Builds the placement `:predict` URL with the API key as a query pair.
    fn predict_url(&self) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["v1beta1", "projects", self.project_number.as_str()])
                .extend(PLACEMENT_PATH);
        }
        url.query_pairs_mut().append_pair("key", &self.api_key);
        url
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;

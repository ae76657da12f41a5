//! Maps raw prediction bodies into [`RecommendedProductSummary`] values.

use serde::Deserialize;
use serde_json::Value;

use storefront_core::{RecommendedProductSummary, SummaryPrice};

use crate::types::PredictionResult;

pub const DEFAULT_CANONICAL_HOST: &str = "https://recommend.superfast.shop";

/// Turns prediction responses into storefront product summaries.
#[derive(Debug, Clone)]
pub struct RecommendationAdapter {
    canonical_host: String,
}

impl Default for RecommendationAdapter {
    fn default() -> Self {
        Self::new(DEFAULT_CANONICAL_HOST)
    }
}

impl RecommendationAdapter {
    #[must_use]
    pub fn new(canonical_host: &str) -> Self {
        Self {
            canonical_host: canonical_host.trim_end_matches('/').to_owned(),
        }
    }

    /// Lazily maps each `results[]` entry of `body` to a summary.
    ///
    /// Returns `None` when `body` has no `results` array, which is also the
    /// shape of relayed upstream errors. Entries missing required fields are
    /// skipped.
    pub fn summaries<'a>(
        &'a self,
        body: &'a Value,
    ) -> Option<impl Iterator<Item = RecommendedProductSummary> + 'a> {
        let results = body.get("results")?.as_array()?;

        Some(results.iter().filter_map(move |entry| {
            match PredictionResult::deserialize(entry) {
                Ok(result) => Some(self.summarize(result)),
                Err(e) => {
                    tracing::debug!(error = %e, "skipping malformed prediction result");
                    None
                }
            }
        }))
    }

    /// Strips the canonical host from an absolute product URI.
    ///
    /// URIs on any other host are returned unchanged.
    #[must_use]
    pub fn storefront_path<'u>(&self, canonical_uri: &'u str) -> &'u str {
        canonical_uri
            .strip_prefix(self.canonical_host.as_str())
            .unwrap_or(canonical_uri)
    }

    fn summarize(&self, result: PredictionResult) -> RecommendedProductSummary {
        let item = result.item_metadata.catalog_item;
        let metadata = item.product_metadata;
        let path = self
            .storefront_path(&metadata.canonical_product_uri)
            .to_owned();

        RecommendedProductSummary {
            id: result.id,
            name: item.title,
            item_type: "product".to_owned(),
            path,
            images: metadata.images,
            price: SummaryPrice {
                price: metadata.exact_price.original_price,
                currency: metadata.currency_code,
            },
        }
    }
}

use std::future::Future;

use storefront_core::RecommendedProductSummary;
use storefront_recommend::{RecommendClient, RecommendationAdapter};

use crate::error::PageError;

/// Where a product page gets its recommended products from.
pub trait RecommendationSource: Send + Sync {
    fn recommend(
        &self,
        sku: &str,
        visitor_id: &str,
    ) -> impl Future<Output = Result<Vec<RecommendedProductSummary>, PageError>> + Send;
}

/// Prediction API client plus the adapter that normalizes its answers.
#[derive(Debug)]
pub struct PredictionSource {
    client: RecommendClient,
    adapter: RecommendationAdapter,
}

impl PredictionSource {
    #[must_use]
    pub fn new(client: RecommendClient, adapter: RecommendationAdapter) -> Self {
        Self { client, adapter }
    }

    #[must_use]
    pub fn client(&self) -> &RecommendClient {
        &self.client
    }
}

impl RecommendationSource for PredictionSource {
    async fn recommend(
        &self,
        sku: &str,
        visitor_id: &str,
    ) -> Result<Vec<RecommendedProductSummary>, PageError> {
        let prediction = self.client.predict(sku, visitor_id).await?;

        let result = match self.adapter.summaries(&prediction.body) {
            Some(summaries) => Ok(summaries.collect()),
            None => Err(PageError::NoResults {
                status: prediction.status,
            }),
        };
        result
    }
}

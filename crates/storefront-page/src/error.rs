use thiserror::Error;

use storefront_recommend::RecommendError;

#[derive(Debug, Error)]
pub enum PageError {
    #[error("product {path} has no default variant")]
    NoDefaultVariant { path: String },

    #[error("product {path} has no variant with sku {sku}")]
    UnknownVariant { path: String, sku: String },

    #[error("recommendation request failed: {0}")]
    Recommend(#[from] RecommendError),

    /// The prediction body carried no `results` array (typically a relayed
    /// upstream error).
    #[error("prediction response (status {status}) has no results")]
    NoResults { status: u16 },
}

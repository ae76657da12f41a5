use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A recommended product, normalized from a prediction response.
///
/// Held only in page-local state and replaced wholesale on each fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedProductSummary {
    pub id: String,
    pub name: String,
    /// Always `"product"`.
    #[serde(rename = "type")]
    pub item_type: String,
    /// Storefront-relative path, e.g. `"/shop/chairs/oak"`.
    pub path: String,
    /// Image descriptors exactly as the prediction service returned them.
    pub images: Vec<serde_json::Value>,
    pub price: SummaryPrice,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryPrice {
    pub price: Decimal,
    pub currency: String,
}

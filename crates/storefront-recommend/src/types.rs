//! Wire types for the upstream prediction endpoint.
//!
//! ## Request
//! Every call sends the same event envelope: a non-dry-run
//! `detail-page-view` for one product, asking for catalog items in the
//! response.
//!
//! ## Response
//! Only the fields the storefront reads are modelled. The body is otherwise
//! owned by the upstream service and relayed untouched. On upstream errors
//! the body carries an `error` object and no `results`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const DETAIL_PAGE_VIEW: &str = "detail-page-view";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictRequest<'a> {
    pub dry_run: bool,
    pub params: PredictParams,
    pub user_event: UserEvent<'a>,
}

impl<'a> PredictRequest<'a> {
    /// Builds the `detail-page-view` envelope for one SKU and visitor.
    #[must_use]
    pub fn detail_page_view(sku: &'a str, visitor_id: &'a str) -> Self {
        Self {
            dry_run: false,
            params: PredictParams {
                return_catalog_item: true,
            },
            user_event: UserEvent {
                event_type: DETAIL_PAGE_VIEW,
                user_info: UserInfo { visitor_id },
                product_event_detail: ProductEventDetail {
                    product_details: vec![ProductDetail { id: sku }],
                },
            },
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictParams {
    pub return_catalog_item: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserEvent<'a> {
    pub event_type: &'static str,
    pub user_info: UserInfo<'a>,
    pub product_event_detail: ProductEventDetail<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo<'a> {
    pub visitor_id: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductEventDetail<'a> {
    pub product_details: Vec<ProductDetail<'a>>,
}

#[derive(Debug, Serialize)]
pub struct ProductDetail<'a> {
    pub id: &'a str,
}

/// One entry of the response's `results` array.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    pub id: String,
    pub item_metadata: ItemMetadata,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemMetadata {
    pub catalog_item: CatalogItem,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub title: String,
    pub product_metadata: ProductMetadata,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductMetadata {
    /// Absolute product URL on the canonical storefront host.
    pub canonical_product_uri: String,
    /// Image descriptors (`uri`, `height`, `width`); passed through untouched.
    #[serde(default)]
    pub images: Vec<serde_json::Value>,
    pub exact_price: ExactPrice,
    pub currency_code: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExactPrice {
    pub original_price: Decimal,
}

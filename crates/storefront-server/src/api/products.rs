//! Product page route: mounts a page, optionally awaits its recommendations,
//! and returns the composed view.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use serde::Deserialize;

use storefront_page::{ChannelTracker, MountedPage, PageError, ProductPage, ProductPageView, VisitorTracker};

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ProductPageQuery {
    /// Present once the visitor tracker has loaded on the client.
    pub visitor_id: Option<String>,
    /// Variant to select after mount. Does not change what was fetched.
    pub variant: Option<String>,
}

fn map_page_error(request_id: String, error: &PageError) -> ApiError {
    match error {
        PageError::UnknownVariant { .. } => {
            ApiError::new(request_id, "bad_request", error.to_string())
        }
        _ => {
            tracing::error!(error = %error, "product page failed");
            ApiError::new(request_id, "internal_error", "product page failed")
        }
    }
}

pub(super) async fn get_product_page(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(path): Path<String>,
    Query(query): Query<ProductPageQuery>,
) -> Result<Json<ApiResponse<ProductPageView>>, ApiError> {
    let path = format!("/{}", path.trim_start_matches('/'));
    let product = state.catalog.product(&path).cloned().ok_or_else(|| {
        ApiError::new(
            req_id.0.clone(),
            "not_found",
            format!("product not found: {path}"),
        )
    })?;

    let page = ProductPage::new(product, state.locale.clone())
        .map_err(|e| map_page_error(req_id.0.clone(), &e))?;

    // Without a visitor id the tracker never loads and nothing is fetched.
    let tracker = match query.visitor_id.filter(|v| !v.trim().is_empty()) {
        Some(visitor_id) => ChannelTracker::loaded(visitor_id),
        None => ChannelTracker::new(),
    };
    let tracker_ready = tracker.visitor_id().is_some();

    let mut mounted = MountedPage::mount(page, tracker, Arc::clone(&state.recommendations));
    if tracker_ready {
        mounted.settled().await;
    }

    if let Some(sku) = query.variant.as_deref() {
        mounted
            .select_variant(sku)
            .await
            .map_err(|e| map_page_error(req_id.0.clone(), &e))?;
    }

    Ok(Json(ApiResponse {
        data: mounted.view().await,
        meta: ResponseMeta::new(req_id.0),
    }))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::super::test_support::{app, get, send};

    fn prediction_body() -> serde_json::Value {
        json!({
            "results": [{
                "id": "oak-side-table",
                "itemMetadata": { "catalogItem": {
                    "title": "Oak Side Table",
                    "productMetadata": {
                        "canonicalProductUri": "https://recommend.superfast.shop/shop/tables/oak-side-table",
                        "images": [],
                        "exactPrice": { "originalPrice": "189.00" },
                        "currencyCode": "USD"
                    }
                } }
            }]
        })
    }

    #[tokio::test]
    async fn page_without_visitor_renders_without_recommendations() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(prediction_body()))
            .expect(0)
            .mount(&server)
            .await;

        let (status, json) = send(
            app(&server.uri()),
            get("/api/v1/products/shop/chairs/oak-lounge-chair"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let data = &json["data"];
        assert_eq!(data["name"], "Oak Lounge Chair");
        assert_eq!(data["hasVariants"], true);
        assert_eq!(data["selectedVariant"]["sku"], "oak-lounge-chair-natural");
        assert_eq!(data["related"]["titleKey"], "relatedProduct");
        assert_eq!(data["related"]["count"], 1);
        assert!(data["recommended"].is_null());
    }

    #[tokio::test]
    async fn page_with_visitor_fetches_for_default_variant() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({
                "userEvent": {
                    "userInfo": { "visitorId": "visitor-7" },
                    "productEventDetail": { "productDetails": [{ "id": "oak-lounge-chair-natural" }] }
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(prediction_body()))
            .expect(1)
            .mount(&server)
            .await;

        let (status, json) = send(
            app(&server.uri()),
            get("/api/v1/products/shop/chairs/oak-lounge-chair?visitorId=visitor-7&variant=oak-lounge-chair-smoked"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let data = &json["data"];
        assert_eq!(data["selectedVariant"]["sku"], "oak-lounge-chair-smoked");
        assert_eq!(data["recommended"]["titleKey"], "recommendedProduct");
        assert_eq!(data["recommended"]["count"], 1);
        assert_eq!(
            data["recommended"]["items"][0]["path"],
            "/shop/tables/oak-side-table"
        );
    }

    #[tokio::test]
    async fn upstream_error_leaves_section_absent() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(403)
                    .set_body_json(json!({ "error": { "code": 403, "message": "denied" } })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let (status, json) = send(
            app(&server.uri()),
            get("/api/v1/products/shop/chairs/oak-lounge-chair?visitorId=visitor-7"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(json["data"]["recommended"].is_null());
    }

    #[tokio::test]
    async fn unknown_product_is_not_found() {
        let (status, json) = send(
            app("http://127.0.0.1:9"),
            get("/api/v1/products/shop/chairs/missing"),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"]["code"], "not_found");
    }

    #[tokio::test]
    async fn unknown_variant_is_bad_request() {
        let (status, json) = send(
            app("http://127.0.0.1:9"),
            get("/api/v1/products/shop/tables/oak-side-table?variant=walnut"),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "bad_request");
    }
}

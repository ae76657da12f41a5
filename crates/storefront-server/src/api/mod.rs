mod basket;
mod frontpage;
mod products;
mod recommendations;

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use storefront_core::{Catalog, Locale};
use storefront_page::PredictionSource;

use crate::middleware::{request_id, RequestId, REQUEST_ID_HEADER};

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub recommendations: Arc<PredictionSource>,
    pub locale: Locale,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    products: usize,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "bad_request" | "validation_error" => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static(REQUEST_ID_HEADER),
        ])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/health", get(health))
        .route(
            "/api/recommendations/{sku}",
            get(recommendations::get_recommendations),
        )
        .route("/api/v1/basket/totals", post(basket::render_totals))
        .route("/api/v1/frontpage", get(frontpage::get_frontpage))
        .route("/api/v1/products/{*path}", get(products::get_product_page))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    Json(ApiResponse {
        data: HealthData {
            status: "ok",
            products: state.catalog.products().len(),
        },
        meta: ResponseMeta::new(req_id.0),
    })
}


#[cfg(test)]
mod tests {
    use super::test_support::{app, get, send};
    use super::*;

    #[test]
    fn api_error_codes_map_to_statuses() {
        let cases = [
            ("not_found", StatusCode::NOT_FOUND),
            ("bad_request", StatusCode::BAD_REQUEST),
            ("validation_error", StatusCode::BAD_REQUEST),
            ("internal_error", StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (code, expected) in cases {
            let response = ApiError::new("req-1", code, "message").into_response();
            assert_eq!(response.status(), expected, "code {code}");
        }
    }

    #[tokio::test]
    async fn health_reports_catalog_size() {
        let (status, json) = send(app("http://127.0.0.1:9"), get("/api/v1/health")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["status"], "ok");
        assert_eq!(json["data"]["products"], 2);
        assert!(json["meta"]["request_id"].is_string());
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let response = tower::ServiceExt::oneshot(app("http://127.0.0.1:9"), get("/api/v1/nope"))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

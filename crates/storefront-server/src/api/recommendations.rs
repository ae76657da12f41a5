//! Recommendation passthrough: relays the upstream prediction body verbatim.

use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{ApiError, AppState};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct RecommendationQuery {
    pub visitor_id: Option<String>,
}

/// Always answers 200 with the upstream JSON, including upstream error bodies.
pub(super) async fn get_recommendations(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(sku): Path<String>,
    Query(query): Query<RecommendationQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let Some(visitor_id) = query.visitor_id.filter(|v| !v.trim().is_empty()) else {
        return Err(ApiError::new(
            req_id.0,
            "bad_request",
            "visitorId query parameter is required",
        ));
    };

    let prediction = state
        .recommendations
        .client()
        .predict(&sku, &visitor_id)
        .await
        .map_err(|e| {
            tracing::error!(sku = %sku, error = %e, "recommendation request failed");
            ApiError::new(req_id.0.clone(), "internal_error", "recommendation request failed")
        })?;

    Ok(Json(prediction.body))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path_regex, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::super::test_support::{app, get, send};

    #[tokio::test]
    async fn upstream_body_is_relayed_verbatim() {
        let server = MockServer::start().await;
        let upstream = json!({ "results": [], "recommendationToken": "tok-1" });
        Mock::given(method("POST"))
            .and(path_regex(r"/projects/123456/.*recently_viewed_default:predict$"))
            .and(query_param("key", "test-key"))
            .and(body_partial_json(json!({
                "userEvent": {
                    "userInfo": { "visitorId": "visitor-9" },
                    "productEventDetail": { "productDetails": [{ "id": "oak-side-table" }] }
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(&upstream))
            .expect(1)
            .mount(&server)
            .await;

        let (status, json) = send(
            app(&server.uri()),
            get("/api/recommendations/oak-side-table?visitorId=visitor-9"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, upstream);
    }

    #[tokio::test]
    async fn upstream_error_is_relayed_with_ok_status() {
        let server = MockServer::start().await;
        let upstream = json!({
            "error": { "code": 403, "message": "API key not valid", "status": "PERMISSION_DENIED" }
        });
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(403).set_body_json(&upstream))
            .expect(1)
            .mount(&server)
            .await;

        let (status, json) = send(
            app(&server.uri()),
            get("/api/recommendations/oak-side-table?visitorId=visitor-9"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, upstream);
    }

    #[tokio::test]
    async fn non_json_upstream_body_is_internal_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
            .mount(&server)
            .await;

        let (status, json) = send(
            app(&server.uri()),
            get("/api/recommendations/oak-side-table?visitorId=visitor-9"),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"]["code"], "internal_error");
    }

    #[tokio::test]
    async fn unreachable_upstream_is_internal_error() {
        let (status, json) = send(
            app("http://127.0.0.1:9"),
            get("/api/recommendations/oak-side-table?visitorId=visitor-9"),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"]["code"], "internal_error");
    }

    #[tokio::test]
    async fn missing_visitor_id_is_bad_request() {
        let (status, json) = send(
            app("http://127.0.0.1:9"),
            get("/api/recommendations/oak-side-table"),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "bad_request");
    }
}

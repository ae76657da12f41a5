use axum::{extract::State, Extension, Json};
use serde::Serialize;

use storefront_core::{CatalogItemRef, Product};

use crate::middleware::RequestId;

use super::{ApiResponse, AppState, ResponseMeta};

/// The frontpage folder. The storefront layout never renders a page header on it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct Frontpage {
    hide_page_header: bool,
    items: Vec<CatalogItemRef>,
}

pub(super) async fn get_frontpage(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Frontpage>> {
    let items = state.catalog.frontpage().map(Product::item_ref).collect();

    Json(ApiResponse {
        data: Frontpage {
            hide_page_header: true,
            items,
        },
        meta: ResponseMeta::new(req_id.0),
    })
}

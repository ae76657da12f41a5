use axum::{extract::State, Extension, Json};
use rust_decimal::Decimal;
use serde::Serialize;

use storefront_core::{AmountCell, BasketState, TotalsRow};

use crate::middleware::RequestId;

use super::{ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct BasketTotals {
    rows: Vec<TotalsRowItem>,
    currency: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct TotalsRowItem {
    modifier: &'static str,
    label_key: &'static str,
    cells: Vec<AmountCellItem>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct AmountCellItem {
    amount: Decimal,
    text: String,
    struck_through: bool,
}

impl From<&AmountCell> for AmountCellItem {
    fn from(cell: &AmountCell) -> Self {
        Self {
            amount: cell.amount,
            text: cell.text(),
            struck_through: cell.struck_through,
        }
    }
}

impl From<&TotalsRow> for TotalsRowItem {
    fn from(row: &TotalsRow) -> Self {
        Self {
            modifier: row.kind.modifier(),
            label_key: row.kind.label_key(),
            cells: row.cells.iter().map(AmountCellItem::from).collect(),
        }
    }
}

/// Renders the totals rows of a basket snapshot. The snapshot is not validated.
pub(super) async fn render_totals(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(basket): Json<BasketState>,
) -> Json<ApiResponse<BasketTotals>> {
    let rows = basket.total_rows();

    Json(ApiResponse {
        data: BasketTotals {
            rows: rows.iter().map(TotalsRowItem::from).collect(),
            currency: state.locale.currency.clone(),
        },
        meta: ResponseMeta::new(req_id.0),
    })
}

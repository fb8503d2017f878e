//! Sale endpoints.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use retail_core::{validation, EntityId, Sale, SaleItem};
use serde::Deserialize;

use crate::error::ApiResult;
use crate::extract::ApiJson;
use crate::state::AppState;

/// Body of `POST /api/sales`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSaleRequest {
    pub customer_id: Option<EntityId>,
    pub items: Option<Vec<SaleItem>>,
}

/// `GET /api/sales`
pub async fn list(State(state): State<AppState>) -> Json<Vec<Sale>> {
    Json(state.store.list_sales().await)
}

/// `POST /api/sales`
///
/// Shape checks happen here; customer, product and stock checks happen in
/// the store under its write lock.
pub async fn create(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateSaleRequest>,
) -> ApiResult<(StatusCode, Json<Sale>)> {
    let input = validation::new_sale(body.customer_id, body.items)?;
    let sale = state.store.create_sale(input).await?;

    Ok((StatusCode::CREATED, Json(sale)))
}

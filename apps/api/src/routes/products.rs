//! Product endpoints.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use retail_core::{validation, Money, Product};
use serde::Deserialize;
use tracing::info;

use crate::error::ApiResult;
use crate::extract::{ApiJson, PathId};
use crate::state::AppState;

/// Body of `POST /api/products`.
///
/// `price` is in major units (`999.0`); `stock` must be a whole number.
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: Option<String>,
    pub price: Option<Money>,
    pub stock: Option<i64>,
}

/// `GET /api/products`
pub async fn list(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.store.list_products().await)
}

/// `GET /api/products/{id}`
pub async fn get(State(state): State<AppState>, PathId(id): PathId) -> ApiResult<Json<Product>> {
    Ok(Json(state.store.get_product(id).await?))
}

/// `POST /api/products`
pub async fn create(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateProductRequest>,
) -> ApiResult<(StatusCode, Json<Product>)> {
    let input = validation::new_product(body.name.as_deref(), body.price, body.stock)?;
    let product = state.store.add_product(input).await;

    info!(id = product.id, "Product created");
    Ok((StatusCode::CREATED, Json(product)))
}

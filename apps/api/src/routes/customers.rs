//! Customer endpoints.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use retail_core::{validation, Customer};
use serde::Deserialize;
use tracing::info;

use crate::error::ApiResult;
use crate::extract::{ApiJson, PathId};
use crate::state::AppState;

/// Body of `POST /api/customers`.
#[derive(Debug, Deserialize)]
pub struct CreateCustomerRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// `GET /api/customers`
pub async fn list(State(state): State<AppState>) -> Json<Vec<Customer>> {
    Json(state.store.list_customers().await)
}

/// `GET /api/customers/{id}`
pub async fn get(State(state): State<AppState>, PathId(id): PathId) -> ApiResult<Json<Customer>> {
    Ok(Json(state.store.get_customer(id).await?))
}

/// `POST /api/customers`
pub async fn create(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateCustomerRequest>,
) -> ApiResult<(StatusCode, Json<Customer>)> {
    let input = validation::new_customer(body.name.as_deref(), body.email.as_deref())?;
    let customer = state.store.add_customer(input).await;

    info!(id = customer.id, "Customer created");
    Ok((StatusCode::CREATED, Json(customer)))
}

//! Request extractors that reject with [`ApiError`] instead of axum's
//! plain-text rejections, so every failure has an `{error}` body.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use retail_core::validation::parse_id;
use retail_core::EntityId;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// JSON request body.
///
/// Malformed JSON, a missing `Content-Type` and wrong field types all
/// become a 400.
#[derive(Debug)]
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(ApiJson(value))
    }
}

/// A record id from the `{id}` path segment.
#[derive(Debug, Clone, Copy)]
pub struct PathId(pub EntityId);

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        Ok(PathId(parse_id("id", &raw)?))
    }
}

use atlas_query::ListParams;
use atlas_store::{CityPatch, Document, NewCity};
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub cities: Vec<Document>,
}

/// Deserialize a request body, folding both transport-level rejections and
/// shape mismatches into a 400 `{error}` response.
fn read_body<T: serde::de::DeserializeOwned>(
    body: Result<Json<Value>, JsonRejection>,
) -> Result<T, ApiError> {
    let Json(value) = body.map_err(|e| ApiError::Body(e.body_text()))?;
    serde_json::from_value(value).map_err(|e| ApiError::Body(e.to_string()))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let city: NewCity = read_body(body)?;
    city.validate()?;
    let city = state.store.insert(city)?;
    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "message": "City added successfully.", "city": city })),
    ))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let patch: CityPatch = read_body(body)?;
    patch.validate()?;
    match state.store.update(&id, patch)? {
        Some(city) => Ok(Json(
            serde_json::json!({ "message": "City updated successfully.", "city": city }),
        )),
        None => Err(ApiError::NotFound),
    }
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    match state.store.delete(&id)? {
        Some(_) => Ok(Json(
            serde_json::json!({ "message": "City deleted successfully." }),
        )),
        None => Err(ApiError::NotFound),
    }
}

/// List with filtering, search, sorting, projection and pagination. The
/// query is built and validated before the store is touched; `total` is
/// counted separately from the page read, with no snapshot across the two
/// calls.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ListResponse>, ApiError> {
    let built = params.build()?;
    let total = state.store.count(&built.query.predicate)?;
    let cities = state.store.find(&built.query)?;
    Ok(Json(ListResponse {
        total,
        page: built.page,
        limit: built.limit,
        cities,
    }))
}

use atlas_query::QueryError;
use atlas_store::{StoreError, ValidationError};
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

pub enum ApiError {
    Query(QueryError),
    Validation(ValidationError),
    Body(String),
    Store(StoreError),
    NotFound,
}

impl From<QueryError> for ApiError {
    fn from(e: QueryError) -> Self {
        ApiError::Query(e)
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        ApiError::Validation(e)
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        ApiError::Store(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "City not found.".to_string()),
            ApiError::Query(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            ApiError::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            ApiError::Body(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::Store(e) => match e {
                StoreError::Conflict(_) => (StatusCode::BAD_REQUEST, e.to_string()),
                StoreError::Storage(_) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            },
        };

        let body = serde_json::json!({ "error": message });
        (status, Json(body)).into_response()
    }
}

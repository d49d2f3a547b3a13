mod cities;
mod health;

use axum::Router;
use axum::routing::{get, put};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/healthz", get(health::healthz))
        .route("/api/cities", get(cities::list).post(cities::create))
        .route(
            "/api/cities/{id}",
            put(cities::update).delete(cities::remove),
        )
}

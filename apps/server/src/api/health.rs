use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use chrono::Utc;

use crate::{main_lib::AppState, models::HealthResponse};

#[utoipa::path(get, path = "/health", responses((status = 200, body = HealthResponse)))]
pub(super) async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        message: "Currency conversion service is running".to_string(),
        rate_source: state.rate_source.as_str().to_string(),
        timestamp: Utc::now(),
    })
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health))
        .route("/api/health", get(health))
}

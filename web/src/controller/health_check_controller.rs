use crate::response::HealthResponse;
use crate::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use log::*;

/// GET the health of the API and its connection to the store.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "API is up and the store is reachable", body = HealthResponse),
        (status = 503, description = "The store is unreachable", body = HealthResponse)
    )
)]
pub async fn health_check(State(app_state): State<AppState>) -> impl IntoResponse {
    match domain::health::check(app_state.db_conn_ref()).await {
        Ok(()) => (StatusCode::OK, Json(HealthResponse::healthy())),
        Err(e) => {
            error!("Health check failed: {e:?}");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse::unhealthy()),
            )
        }
    }
}

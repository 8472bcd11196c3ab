use crate::response::{ErrorResponse, LeaderboardResponse};
use crate::{AppState, Error};
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use domain::session as SessionApi;

use log::*;

/// GET the current top 10 players, highest catch count first.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Successfully retrieved the leaderboard", body = LeaderboardResponse),
        (status = 500, description = "The store could not be queried", body = ErrorResponse)
    )
)]
pub async fn index(State(app_state): State<AppState>) -> Result<impl IntoResponse, Error> {
    debug!("GET leaderboard");

    let entries = SessionApi::leaderboard(app_state.db_conn_ref()).await?;

    debug!("Leaderboard entries: {}", entries.len());

    Ok(Json(LeaderboardResponse::new(entries)))
}

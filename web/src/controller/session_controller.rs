use crate::extractors::json_payload::JsonPayload;
use crate::params::session::SaveParams;
use crate::response::{ErrorResponse, SaveSessionResponse};
use crate::{AppState, Error};
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use domain::session as SessionApi;

use log::*;

/// POST a finished play session. Responds with the new id and the refreshed leaderboard.
#[utoipa::path(
    post,
    path = "/save-session",
    request_body = SaveParams,
    responses(
        (status = 200, description = "Session stored", body = SaveSessionResponse),
        (status = 422, description = "Body is not a valid session", body = ErrorResponse),
        (status = 500, description = "The store rejected the insert; nothing was saved", body = ErrorResponse)
    )
)]
pub async fn save(
    State(app_state): State<AppState>,
    JsonPayload(params): JsonPayload<SaveParams>,
) -> Result<impl IntoResponse, Error> {
    debug!("POST save session: {params:?}");

    let saved = SessionApi::save(
        app_state.db_conn_ref(),
        params.username,
        params.caught_butterflies,
    )
    .await?;

    Ok(Json(SaveSessionResponse::new(
        saved.session.id,
        saved.leaderboard,
    )))
}

use crate::controller::{
    echo_controller, health_check_controller, leaderboard_controller, session_controller,
};
use crate::{params, response, AppState};
use axum::{
    routing::{get, post},
    Router,
};

use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;

// This is the global definition of our OpenAPI spec. To be a part
// of the rendered spec, a path and schema must be listed here.
#[derive(OpenApi)]
#[openapi(
        info(
            title = "Butterfly Leaderboard API"
        ),
        paths(
            leaderboard_controller::index,
            session_controller::save,
            health_check_controller::health_check,
        ),
        components(
            schemas(
                domain::sessions::LeaderboardEntry,
                params::session::SaveParams,
                response::LeaderboardResponse,
                response::SaveSessionResponse,
                response::HealthResponse,
                response::ErrorResponse,
                response::Status,
            )
        ),
        tags(
            (name = "butterfly_leaderboard", description = "Butterfly catching game leaderboard API")
        )
    )]
struct ApiDoc;

pub fn define_routes(app_state: AppState) -> Router {
    Router::new()
        .merge(leaderboard_routes(app_state.clone()))
        .merge(session_routes(app_state.clone()))
        .merge(health_routes(app_state))
        .merge(echo_routes())
        .merge(RapiDoc::with_openapi("/api-docs/openapi.json", ApiDoc::openapi()).path("/rapidoc"))
}

fn leaderboard_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(leaderboard_controller::index))
        .with_state(app_state)
}

fn session_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/save-session", post(session_controller::save))
        .with_state(app_state)
}

fn health_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check_controller::health_check))
        .with_state(app_state)
}

fn echo_routes() -> Router {
    Router::new().route("/ws", get(echo_controller::echo))
}

#[cfg(test)]
mod tests {
    use crate::test_support::send;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use sea_orm::DatabaseConnection;

    #[tokio::test]
    async fn openapi_document_lists_every_http_route() {
        let request = Request::builder()
            .uri("/api-docs/openapi.json")
            .body(Body::empty())
            .unwrap();

        let response = send(DatabaseConnection::Disconnected, request).await;
        assert_eq!(response.status(), StatusCode::OK);

        let doc = crate::test_support::json_body(response).await;
        let paths = doc["paths"].as_object().expect("paths object");
        for path in ["/", "/save-session", "/health"] {
            assert!(paths.contains_key(path), "missing {path}");
        }
    }

    #[tokio::test]
    async fn unknown_paths_are_not_found() {
        let request = Request::builder()
            .uri("/leaderboard")
            .body(Body::empty())
            .unwrap();

        let response = send(DatabaseConnection::Disconnected, request).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

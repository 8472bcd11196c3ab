use axum::http::HeaderValue;
use axum::Router;
use log::*;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};

pub use error::{Error, Result};
pub use service::AppState;

mod controller;
mod error;
mod extractors;
mod params;
mod response;
mod router;

/// Builds the complete application: routes, OpenAPI docs and the CORS policy.
pub fn app(app_state: AppState) -> Router {
    let cors = cors_layer(&app_state.config.allowed_origins);
    router::define_routes(app_state).layer(cors)
}

/// Binds the configured address and serves requests until Ctrl+C or SIGTERM.
pub async fn init_server(app_state: AppState) -> std::io::Result<()> {
    let listen_addr = app_state.config.listen_addr();
    info!(
        "Server starting... listening for connections on http://{listen_addr} ({})",
        app_state.config.runtime_env()
    );

    let listener = TcpListener::bind(&listen_addr).await?;

    axum::serve(listener, app(app_state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring invalid CORS origin {origin:?}: {e}");
                None
            }
        })
        .collect();

    debug!("CORS allowed origins: {allowed_origins:?}");

    // Credentials cannot be combined with wildcard methods/headers, so mirror them instead.
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, Response};
    use clap::Parser;
    use sea_orm::DatabaseConnection;
    use service::config::Config;
    use std::sync::Arc;
    use tower::ServiceExt;

    pub(crate) fn app_state(db: DatabaseConnection) -> AppState {
        let config = Config::parse_from(["butterfly_leaderboard"]);
        AppState::new(config, &Arc::new(db))
    }

    pub(crate) async fn send(db: DatabaseConnection, request: Request<Body>) -> Response<Body> {
        app(app_state(db))
            .oneshot(request)
            .await
            .expect("router is infallible")
    }

    pub(crate) async fn json_body(response: Response<Body>) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should be readable");
        serde_json::from_slice(&bytes).expect("body should be JSON")
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::send;
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use sea_orm::DatabaseConnection;

    #[tokio::test]
    async fn cors_allows_the_configured_frontend_origin() {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/save-session")
            .header(header::ORIGIN, "http://localhost:3000")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
            .body(Body::empty())
            .unwrap();

        let response = send(DatabaseConnection::Disconnected, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://localhost:3000"
        );
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_CREDENTIALS],
            "true"
        );
    }

    #[tokio::test]
    async fn cors_does_not_echo_unknown_origins() {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/save-session")
            .header(header::ORIGIN, "https://elsewhere.example.com")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap();

        let response = send(DatabaseConnection::Disconnected, request).await;

        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }
}

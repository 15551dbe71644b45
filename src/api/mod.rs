//! Activity Signup REST API
//!
//! HTTP API layer, built with Axum.
//!
//! # Endpoints
//!
//! ## Activities
//! - `GET /activities` - All activities, keyed by name, in catalog order
//! - `POST /activities/:activity_name/signup?email=` - Sign up a participant
//! - `DELETE /activities/:activity_name/participants?email=` - Remove a participant
//!
//! ## UI
//! - `GET /` - Redirect to `/static/index.html`
//! - `GET /static/*` - Built activities UI
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use activity_signup::api::{serve, AppState};
//! use activity_signup::catalog::ActivityCatalog;
//! use activity_signup::config::ServerConfig;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServerConfig::default();
//!     let state = AppState::new(Arc::new(ActivityCatalog::with_defaults()), config);
//!     serve(state).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    http::{HeaderValue, Method},
    response::Redirect,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

/// Path the bare root redirects to
pub const INDEX_PATH: &str = "/static/index.html";

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let static_dir = ServeDir::new(&state.config.static_dir);
    let cors = cors_layer(&state.config.cors_origins);

    let activity_routes = Router::new()
        .route("/activities", get(routes::activities::list_activities))
        .route(
            "/activities/:activity_name/signup",
            post(routes::activities::signup_for_activity),
        )
        .route(
            "/activities/:activity_name/participants",
            delete(routes::activities::unregister_participant),
        );

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/", get(routes::health::full_health));

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(|| async { Redirect::temporary(INDEX_PATH) }))
        .merge(activity_routes)
        .nest("/health", health_routes)
        .nest_service("/static", static_dir)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
}

/// Start the API server
pub async fn serve(state: AppState) -> Result<(), ApiError> {
    let addr = state.config.addr();
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Activity signup API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Activity signup API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
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

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::dto::{HealthResponse, MessageResponse};
    use crate::catalog::{ActivityCatalog, ActivityCollection, ActivityInfo};
    use crate::config::ServerConfig;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde::de::DeserializeOwned;
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let state = AppState::new(Arc::new(ActivityCatalog::with_defaults()), ServerConfig::default());
        build_router(state)
    }

    fn create_small_app() -> Router {
        let catalog = ActivityCatalog::new(
            ActivityCollection::new()
                .with(
                    "Chess Club",
                    ActivityInfo::new("d", "Mon 3pm", 2).participants(["a@x.com"]),
                )
                .with("Art Club", ActivityInfo::new("d", "Tue 4pm", 5)),
        );
        build_router(AppState::new(Arc::new(catalog), ServerConfig::default()))
    }

    async fn send(app: &Router, method: &str, uri: &str) -> Response {
        app.clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> T {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn signup_uri(activity: &str, email: &str) -> String {
        format!(
            "/activities/{}/signup?email={}",
            urlencoding::encode(activity),
            urlencoding::encode(email)
        )
    }

    fn participants_uri(activity: &str, email: &str) -> String {
        format!(
            "/activities/{}/participants?email={}",
            urlencoding::encode(activity),
            urlencoding::encode(email)
        )
    }

    #[tokio::test]
    async fn test_root_redirects_to_index() {
        let app = create_test_app();
        let response = send(&app, "GET", "/").await;

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers()[header::LOCATION], INDEX_PATH);
    }

    #[tokio::test]
    async fn test_list_activities() {
        let app = create_test_app();
        let response = send(&app, "GET", "/activities").await;
        assert_eq!(response.status(), StatusCode::OK);

        let activities: ActivityCollection = read_json(response).await;
        assert!(activities.get("Basketball").is_some());
    }

    #[tokio::test]
    async fn test_list_activities_preserves_catalog_order() {
        let app = create_small_app();
        let activities: ActivityCollection = read_json(send(&app, "GET", "/activities").await).await;

        let names: Vec<&str> = activities.names().collect();
        assert_eq!(names, vec!["Chess Club", "Art Club"]);
    }

    #[tokio::test]
    async fn test_signup_and_remove_participant() {
        let app = create_test_app();
        let activity = "Chess Club";
        let email = "tester@example.com";

        let response = send(&app, "POST", &signup_uri(activity, email)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: MessageResponse = read_json(response).await;
        assert!(body.message.contains("Signed up"));

        let activities: ActivityCollection = read_json(send(&app, "GET", "/activities").await).await;
        assert!(activities.get(activity).unwrap().has_participant(email));

        let response = send(&app, "DELETE", &participants_uri(activity, email)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: MessageResponse = read_json(response).await;
        assert!(body.message.contains("Removed"));

        let activities: ActivityCollection = read_json(send(&app, "GET", "/activities").await).await;
        assert!(!activities.get(activity).unwrap().has_participant(email));
    }

    #[tokio::test]
    async fn test_signup_duplicate() {
        let app = create_test_app();
        let uri = signup_uri("Programming Class", "dup@example.com");

        assert_eq!(send(&app, "POST", &uri).await.status(), StatusCode::OK);

        let response = send(&app, "POST", &uri).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = read_json(response).await;
        assert_eq!(body["detail"], "Student is already signed up");
    }

    #[tokio::test]
    async fn test_signup_full_activity() {
        let app = create_small_app();
        assert_eq!(
            send(&app, "POST", &signup_uri("Chess Club", "b@x.com")).await.status(),
            StatusCode::OK
        );

        let response = send(&app, "POST", &signup_uri("Chess Club", "c@x.com")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = read_json(response).await;
        assert_eq!(body["detail"], "Activity is full");
    }

    #[tokio::test]
    async fn test_activity_not_found() {
        let app = create_test_app();
        let response = send(&app, "POST", &signup_uri("NoSuchActivity", "a@b.com")).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = read_json(response).await;
        assert_eq!(body["detail"], "Activity not found");
    }

    #[tokio::test]
    async fn test_remove_not_found() {
        let app = create_test_app();
        let response = send(&app, "DELETE", &participants_uri("Basketball", "not@there.com")).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = read_json(response).await;
        assert_eq!(body["detail"], "Participant not found");
    }

    #[tokio::test]
    async fn test_signup_missing_email() {
        let app = create_test_app();
        let response = send(&app, "POST", "/activities/Chess%20Club/signup").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = read_json(response).await;
        assert_eq!(body["detail"], "Email is required");
    }

    #[tokio::test]
    async fn test_health() {
        let app = create_test_app();

        assert_eq!(send(&app, "GET", "/health/live").await.status(), StatusCode::OK);

        let response = send(&app, "GET", "/health").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: HealthResponse = read_json(response).await;
        assert_eq!(body.status, "healthy");
        assert!(body.activities > 0);
    }

    #[tokio::test]
    async fn test_static_files_served() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<div id=\"activities-list\"></div>").unwrap();

        let config = ServerConfig {
            static_dir: dir.path().to_string_lossy().to_string(),
            ..Default::default()
        };
        let app = build_router(AppState::new(Arc::new(ActivityCatalog::with_defaults()), config));

        let response = send(&app, "GET", INDEX_PATH).await;
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(String::from_utf8_lossy(&bytes).contains("activities-list"));
    }
}

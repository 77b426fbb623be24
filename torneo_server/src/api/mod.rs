//! HTTP API for the tournament registration service.
//!
//! # Endpoints
//!
//! ```text
//! GET  /health         - Health check (public)
//! POST /register       - Register an account (public)
//! POST /login          - Login, returns a bearer token (public)
//! GET  /torneos        - List tournaments (public)
//! POST /torneos        - Create a tournament (bearer token, rol=organizador)
//! GET  /participantes  - List participants of one tournament (public)
//! POST /participantes  - Enroll a participant (bearer token, rol=organizador)
//! ```
//!
//! Every handler performs at most one store round-trip and maps its own
//! failures to a response through [`error::ApiError`]; the guards in
//! [`guards`] run in front of the two protected routes only.

pub mod auth;
pub mod error;
pub mod guards;
pub mod participants;
pub mod tournaments;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;
use torneo::{auth::AuthManager, participant::ParticipantManager, tournament::TournamentManager};
use tower_http::cors::CorsLayer;

use error::ApiError;

/// Application state shared across all HTTP handlers.
///
/// Cloned per request; cheap thanks to the Arc wrappers.
#[derive(Clone)]
pub struct AppState {
    pub auth_manager: Arc<AuthManager>,
    pub tournament_manager: Arc<TournamentManager>,
    pub participant_manager: Arc<ParticipantManager>,
    pub pool: Arc<PgPool>,
}

/// Create the complete API router.
///
/// The POST halves of `/torneos` and `/participantes` carry the session
/// guard and role gate; their GET halves and everything else stay public.
/// CORS is permissive, matching the service's single-frontend deployment.
pub fn create_router(state: AppState) -> Router {
    let organizador_gate = axum::middleware::from_fn(guards::require_organizador);
    let session_guard =
        axum::middleware::from_fn_with_state(state.clone(), guards::auth_middleware);

    Router::new()
        .route("/health", get(health_check))
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route(
            "/torneos",
            post(tournaments::create_tournament)
                .route_layer(organizador_gate.clone())
                .route_layer(session_guard.clone())
                .get(tournaments::list_tournaments),
        )
        .route(
            "/participantes",
            post(participants::create_participant)
                .route_layer(organizador_gate)
                .route_layer(session_guard)
                .get(participants::list_participants),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint for monitoring.
///
/// Answers 200 while the store responds to a trivial query, 503 otherwise.
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let db_healthy = sqlx::query("SELECT 1")
        .fetch_one(&*state.pool)
        .await
        .is_ok();

    let status_code = if db_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let response = json!({
        "status": if db_healthy { "healthy" } else { "unhealthy" },
        "version": env!("CARGO_PKG_VERSION"),
        "database": db_healthy,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (status_code, Json(response))
}

/// Reject missing or empty string fields with the uniform validation error.
pub(crate) fn require_field(value: Option<String>) -> Result<String, ApiError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(missing_fields()),
    }
}

/// Reject missing numeric fields with the uniform validation error.
pub(crate) fn require_number<T>(value: Option<T>) -> Result<T, ApiError> {
    value.ok_or_else(missing_fields)
}

fn missing_fields() -> ApiError {
    ApiError::Validation("Todos los campos son obligatorios".to_string())
}

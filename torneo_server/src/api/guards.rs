//! Session guard and role gate middleware for protected endpoints.
//!
//! Protected routes run two layers in sequence:
//! 1. [`auth_middleware`] extracts and verifies the `Authorization: Bearer`
//!    token and injects the decoded claims into request extensions;
//! 2. [`require_organizador`] checks the role carried by those claims.
//!
//! The role gate is a pure predicate over the claims; it performs no I/O.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use torneo::auth::{AccessTokenClaims, ROL_ORGANIZADOR};

use super::{AppState, error::ApiError};

/// Session guard: validates the bearer token and injects the claims.
///
/// - Missing header or non-Bearer scheme answers 401.
/// - Bad signature, expired, or malformed token answers 403 (contract quirk).
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or(ApiError::MissingToken)?;

    let claims = state
        .auth_manager
        .verify_access_token(token)
        .map_err(|_| ApiError::InvalidToken)?;

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}

/// Role gate: allows the request only when the authenticated role is
/// `organizador`.
pub async fn require_organizador(request: Request, next: Next) -> Result<Response, ApiError> {
    let allowed = request
        .extensions()
        .get::<AccessTokenClaims>()
        .map(|claims| claims.rol == ROL_ORGANIZADOR)
        .unwrap_or(false);

    if !allowed {
        return Err(ApiError::Forbidden);
    }

    Ok(next.run(request).await)
}

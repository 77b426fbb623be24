//! Uniform error responses for the HTTP API.
//!
//! Every handler and guard returns [`ApiError`]; its `IntoResponse` impl is
//! the single place where failures become status codes and JSON bodies.
//!
//! Two deliberate oddities of the public contract live here and must not be
//! "fixed" silently:
//! - an invalid or expired token answers 403 (not 401),
//! - server errors echo the raw internal detail in an `error` field.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use torneo::{AuthError, ParticipantError, TournamentError};

/// Error type returned by every handler and guard.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Missing or empty request field
    #[error("{0}")]
    Validation(String),

    /// No bearer token on a protected route
    #[error("Token no proporcionado")]
    MissingToken,

    /// Bad signature, expired, or malformed token
    #[error("Token inválido o expirado")]
    InvalidToken,

    /// Authenticated but the role is not allowed
    #[error("Acceso restringido al rol organizador")]
    Forbidden,

    /// No account matches the (usuario, rol) pair
    #[error("Usuario o rol incorrectos")]
    AccountNotFound,

    /// Password did not match the stored hash
    #[error("Contraseña incorrecta")]
    WrongPassword,

    /// Store failure or any other unhandled error
    #[error("Error interno del servidor")]
    Internal(String),
}

/// JSON error body: a human-readable message, plus the raw detail for
/// server errors.
#[derive(Serialize)]
struct ErrorBody {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, None),
            ApiError::MissingToken => (StatusCode::UNAUTHORIZED, None),
            ApiError::InvalidToken => (StatusCode::FORBIDDEN, None),
            ApiError::Forbidden => (StatusCode::FORBIDDEN, None),
            ApiError::AccountNotFound => (StatusCode::NOT_FOUND, None),
            ApiError::WrongPassword => (StatusCode::UNAUTHORIZED, None),
            ApiError::Internal(detail) => {
                tracing::error!(error = %detail, "unhandled server error");
                (StatusCode::INTERNAL_SERVER_ERROR, Some(detail.clone()))
            }
        };

        let body = ErrorBody {
            message: self.to_string(),
            error: detail,
        };

        (status, Json(body)).into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AccountNotFound => ApiError::AccountNotFound,
            AuthError::InvalidPassword => ApiError::WrongPassword,
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<TournamentError> for ApiError {
    fn from(err: TournamentError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl From<ParticipantError> for ApiError {
    fn from(err: ParticipantError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_token_answers_forbidden() {
        let response = ApiError::InvalidToken.into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn wrong_password_answers_unauthorized() {
        let response = ApiError::WrongPassword.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn auth_store_errors_become_internal() {
        let err: ApiError = AuthError::HashingFailed.into();
        assert!(matches!(err, ApiError::Internal(_)));
    }
}

//! Account registration and login handlers.
//!
//! Both endpoints are public. Field presence is validated here, before any
//! store round-trip; the domain-level work lives in
//! [`torneo::auth::AuthManager`].
//!
//! # Examples
//!
//! Register an account:
//! ```bash
//! curl -X POST http://localhost:5000/register \
//!   -H "Content-Type: application/json" \
//!   -d '{"nombre": "Ana", "apellido": "García", "club": "CD Norte",
//!        "telefono": "600111222", "correo": "ana@example.com",
//!        "usuario": "ana", "contraseña": "secreta123", "rol": "organizador"}'
//! ```
//!
//! Login:
//! ```bash
//! curl -X POST http://localhost:5000/login \
//!   -H "Content-Type: application/json" \
//!   -d '{"usuario": "ana", "contraseña": "secreta123", "rol": "organizador"}'
//! ```

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use torneo::auth::{LoginRequest, RegisterRequest};

use super::{AppState, error::ApiError, require_field};

#[derive(Debug, Deserialize)]
pub struct RegisterPayload {
    pub nombre: Option<String>,
    pub apellido: Option<String>,
    pub club: Option<String>,
    pub telefono: Option<String>,
    pub correo: Option<String>,
    pub usuario: Option<String>,
    #[serde(rename = "contraseña")]
    pub contrasena: Option<String>,
    pub rol: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginPayload {
    pub usuario: Option<String>,
    #[serde(rename = "contraseña")]
    pub contrasena: Option<String>,
    pub rol: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
    pub rol: String,
}

/// Register a new account.
///
/// All eight fields are required; a missing or empty one answers 400 without
/// touching the store. The raw password is hashed before the insert. A
/// duplicate `(usuario, rol)` pair is rejected by the store and surfaces as
/// a generic 500.
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterPayload>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let request = RegisterRequest {
        nombre: require_field(payload.nombre)?,
        apellido: require_field(payload.apellido)?,
        club: require_field(payload.club)?,
        telefono: require_field(payload.telefono)?,
        correo: require_field(payload.correo)?,
        usuario: require_field(payload.usuario)?,
        contrasena: require_field(payload.contrasena)?,
        rol: require_field(payload.rol)?,
    };

    state.auth_manager.register(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Usuario registrado correctamente".to_string(),
        }),
    ))
}

/// Authenticate an account and issue a session token.
///
/// The lookup key is the `(usuario, rol)` pair: an unknown pair answers 404
/// (deliberately not revealing which half failed), a wrong password answers
/// 401 with no token issued. On success the response carries a 2-hour JWT
/// and the role it was issued for.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<Json<LoginResponse>, ApiError> {
    let request = LoginRequest {
        usuario: require_field(payload.usuario)?,
        contrasena: require_field(payload.contrasena)?,
        rol: require_field(payload.rol)?,
    };

    let (account, token) = state.auth_manager.login(request).await?;

    Ok(Json(LoginResponse {
        message: "Inicio de sesión correcto".to_string(),
        token,
        rol: account.rol,
    }))
}

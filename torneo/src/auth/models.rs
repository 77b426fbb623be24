//! Authentication data models.

use serde::{Deserialize, Serialize};

/// Account ID type
pub type AccountId = i64;

/// Role string allowed to create tournaments and enroll participants.
pub const ROL_ORGANIZADOR: &str = "organizador";

/// Account row as exposed to callers.
///
/// The stored password hash never leaves the store layer; this struct only
/// carries the public identity fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub nombre: String,
    pub apellido: String,
    pub club: String,
    pub telefono: String,
    pub correo: String,
    pub usuario: String,
    pub rol: String,
}

/// Account registration request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub nombre: String,
    pub apellido: String,
    pub club: String,
    pub telefono: String,
    pub correo: String,
    pub usuario: String,
    #[serde(rename = "contraseña")]
    pub contrasena: String,
    pub rol: String,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub usuario: String,
    #[serde(rename = "contraseña")]
    pub contrasena: String,
    pub rol: String,
}

/// JWT claims embedded in an access token.
///
/// The wire names (`id`, `usuario`, `rol`) are part of the token contract and
/// must not change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    pub id: AccountId,
    pub usuario: String,
    pub rol: String,
    pub exp: i64,
    pub iat: i64,
}

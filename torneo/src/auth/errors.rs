//! Authentication error types.

use thiserror::Error;

/// Authentication errors
#[derive(Debug, Error)]
pub enum AuthError {
    /// Database error
    #[error("error de base de datos: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing failed
    #[error("no se pudo calcular el hash de la contraseña")]
    HashingFailed,

    /// Password verification failed
    #[error("contraseña incorrecta")]
    InvalidPassword,

    /// No account matches the `(usuario, rol)` pair.
    ///
    /// Deliberately ambiguous between "no such user" and "wrong role" so the
    /// response does not reveal which half of the pair failed.
    #[error("usuario o rol incorrectos")]
    AccountNotFound,

    /// JWT token error
    #[error("error de token: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),
}

/// Result type for authentication operations
pub type AuthResult<T> = Result<T, AuthError>;

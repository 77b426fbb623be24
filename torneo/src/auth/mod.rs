//! Authentication module providing account registration, login, and tokens.
//!
//! This module implements the account side of the platform:
//! - bcrypt password hashing (salted per call, never reversible)
//! - stateless JWT access tokens (2-hour expiry, HS256 server secret)
//! - login keyed on the `(usuario, rol)` pair, so one login name may hold
//!   several accounts differentiated by role
//!
//! ## Example
//!
//! ```no_run
//! use torneo::auth::{AuthManager, LoginRequest};
//! use torneo::db::Database;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::new(&Default::default()).await?;
//!     let auth = AuthManager::new(Arc::new(db.pool().clone()), "jwt_secret".to_string());
//!
//!     let request = LoginRequest {
//!         usuario: "ana".to_string(),
//!         contrasena: "secreta123".to_string(),
//!         rol: "organizador".to_string(),
//!     };
//!
//!     let (account, token) = auth.login(request).await?;
//!     println!("sesión iniciada para {} ({})", account.usuario, token);
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod manager;
pub mod models;

pub use errors::{AuthError, AuthResult};
pub use manager::AuthManager;
pub use models::{
    AccessTokenClaims, Account, AccountId, LoginRequest, ROL_ORGANIZADOR, RegisterRequest,
};

//! Authentication manager implementation.

use super::{
    errors::{AuthError, AuthResult},
    models::{AccessTokenClaims, Account, AccountId, LoginRequest, RegisterRequest},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use sqlx::{PgPool, Row};
use std::sync::Arc;

/// bcrypt work factor applied to every stored credential.
const BCRYPT_COST: u32 = 10;

/// Authentication manager
#[derive(Clone)]
pub struct AuthManager {
    pool: Arc<PgPool>,
    jwt_secret: String,
    token_duration: Duration,
}

impl AuthManager {
    /// Create a new authentication manager
    ///
    /// # Arguments
    ///
    /// * `pool` - Database connection pool
    /// * `jwt_secret` - Secret key for JWT signing
    pub fn new(pool: Arc<PgPool>, jwt_secret: String) -> Self {
        Self {
            pool,
            jwt_secret,
            token_duration: Duration::hours(2),
        }
    }

    /// Register a new account
    ///
    /// Hashes the raw password with bcrypt (fresh salt per call, so two
    /// registrations with the same password store different hashes) and
    /// inserts one row. Uniqueness of `(usuario, rol)` is the store's
    /// business; a duplicate insert surfaces as [`AuthError::Database`].
    ///
    /// # Arguments
    ///
    /// * `request` - Registration request with identity fields and raw password
    ///
    /// # Returns
    ///
    /// * `AuthResult<AccountId>` - Generated account id or error
    pub async fn register(&self, request: RegisterRequest) -> AuthResult<AccountId> {
        let password_hash = self.hash_password(&request.contrasena)?;

        let row = sqlx::query(
            r#"
            INSERT INTO usuarios (nombre, apellido, club, telefono, correo, usuario, contrasena, rol)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            "#,
        )
        .bind(&request.nombre)
        .bind(&request.apellido)
        .bind(&request.club)
        .bind(&request.telefono)
        .bind(&request.correo)
        .bind(&request.usuario)
        .bind(&password_hash)
        .bind(&request.rol)
        .fetch_one(self.pool.as_ref())
        .await?;

        let id: AccountId = row.get("id");
        log::debug!("cuenta {} registrada para usuario {}", id, request.usuario);

        Ok(id)
    }

    /// Log an account in and issue an access token
    ///
    /// The lookup key is the `(usuario, rol)` pair: one login name may hold
    /// several accounts differentiated by role, and a wrong role behaves
    /// exactly like an unknown user.
    ///
    /// # Arguments
    ///
    /// * `request` - Login request with login name, raw password, and role
    ///
    /// # Returns
    ///
    /// * `AuthResult<(Account, String)>` - Account and signed token or error
    ///
    /// # Errors
    ///
    /// * `AuthError::AccountNotFound` - No account for the `(usuario, rol)` pair
    /// * `AuthError::InvalidPassword` - Password does not match the stored hash
    pub async fn login(&self, request: LoginRequest) -> AuthResult<(Account, String)> {
        let row = sqlx::query(
            r#"
            SELECT id, nombre, apellido, club, telefono, correo, usuario, contrasena, rol
            FROM usuarios
            WHERE usuario = $1 AND rol = $2
            "#,
        )
        .bind(&request.usuario)
        .bind(&request.rol)
        .fetch_optional(self.pool.as_ref())
        .await?
        .ok_or(AuthError::AccountNotFound)?;

        let password_hash: String = row.get("contrasena");
        self.verify_password(&request.contrasena, &password_hash)?;

        let account = Account {
            id: row.get("id"),
            nombre: row.get("nombre"),
            apellido: row.get("apellido"),
            club: row.get("club"),
            telefono: row.get("telefono"),
            correo: row.get("correo"),
            usuario: row.get("usuario"),
            rol: row.get("rol"),
        };

        let token = self.issue_access_token(account.id, &account.usuario, &account.rol)?;

        Ok((account, token))
    }

    /// Verify an access token
    ///
    /// # Arguments
    ///
    /// * `token` - JWT access token
    ///
    /// # Returns
    ///
    /// * `AuthResult<AccessTokenClaims>` - Decoded claims or error
    pub fn verify_access_token(&self, token: &str) -> AuthResult<AccessTokenClaims> {
        let token_data = decode::<AccessTokenClaims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }

    /// Issue a signed access token for an account.
    ///
    /// Called at login; also the seam test code uses to mint tokens without
    /// going through the store.
    pub fn issue_access_token(
        &self,
        id: AccountId,
        usuario: &str,
        rol: &str,
    ) -> AuthResult<String> {
        let now = Utc::now();
        let claims = AccessTokenClaims {
            id,
            usuario: usuario.to_string(),
            rol: rol.to_string(),
            exp: (now + self.token_duration).timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )?;

        Ok(token)
    }

    /// Hash a raw password with bcrypt
    fn hash_password(&self, password: &str) -> AuthResult<String> {
        bcrypt::hash(password, BCRYPT_COST).map_err(|_| AuthError::HashingFailed)
    }

    /// Verify a raw password against a stored hash
    fn verify_password(&self, password: &str, hash: &str) -> AuthResult<()> {
        match bcrypt::verify(password, hash) {
            Ok(true) => Ok(()),
            _ => Err(AuthError::InvalidPassword),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::postgres::PgPoolOptions;

    /// Manager over a lazy pool; hashing and token tests never touch the store.
    fn test_manager(secret: &str) -> AuthManager {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://postgres@localhost/torneo_test")
            .expect("lazy pool");
        AuthManager::new(Arc::new(pool), secret.to_string())
    }

    #[tokio::test]
    async fn hashing_is_salted_per_call() {
        let auth = test_manager("secret");

        let first = auth.hash_password("secreta123").unwrap();
        let second = auth.hash_password("secreta123").unwrap();

        assert_ne!(first, second);
        assert_ne!(first, "secreta123");
        auth.verify_password("secreta123", &first).unwrap();
        auth.verify_password("secreta123", &second).unwrap();
    }

    #[tokio::test]
    async fn wrong_password_is_rejected() {
        let auth = test_manager("secret");

        let hash = auth.hash_password("secreta123").unwrap();
        let err = auth.verify_password("otra", &hash).unwrap_err();

        assert!(matches!(err, AuthError::InvalidPassword));
    }

    #[tokio::test]
    async fn token_roundtrip_preserves_identity() {
        let auth = test_manager("una_clave_de_firma_suficientemente_larga");

        let token = auth.issue_access_token(42, "ana", "organizador").unwrap();
        let claims = auth.verify_access_token(&token).unwrap();

        assert_eq!(claims.id, 42);
        assert_eq!(claims.usuario, "ana");
        assert_eq!(claims.rol, "organizador");
        assert_eq!(claims.exp - claims.iat, 2 * 60 * 60);
    }

    #[tokio::test]
    async fn token_from_other_secret_is_rejected() {
        let auth = test_manager("una_clave_de_firma_suficientemente_larga");
        let other = test_manager("otra_clave_de_firma_completamente_distinta");

        let token = other.issue_access_token(1, "ana", "organizador").unwrap();

        assert!(auth.verify_access_token(&token).is_err());
    }

    #[tokio::test]
    async fn garbage_token_is_rejected() {
        let auth = test_manager("una_clave_de_firma_suficientemente_larga");

        assert!(auth.verify_access_token("no-es-un-token").is_err());
    }

    #[tokio::test]
    async fn expired_token_is_rejected() {
        let secret = "una_clave_de_firma_suficientemente_larga";
        let auth = test_manager(secret);

        let now = Utc::now().timestamp();
        let claims = AccessTokenClaims {
            id: 1,
            usuario: "ana".to_string(),
            rol: "organizador".to_string(),
            // well past the default validation leeway
            exp: now - 7200,
            iat: now - 14400,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap();

        assert!(auth.verify_access_token(&token).is_err());
    }
}

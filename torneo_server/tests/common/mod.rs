//! Shared helpers for the server integration tests.

use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use torneo::auth::AuthManager;
use torneo::participant::ParticipantManager;
use torneo::tournament::TournamentManager;
use torneo_server::api::{AppState, create_router};

/// Signing secret used by every test app.
pub const TEST_JWT_SECRET: &str = "clave_de_firma_para_pruebas_0123456789abcdef";

/// Check whether a real database was provided via environment variable.
#[allow(dead_code)]
pub fn database_available() -> bool {
    std::env::var("DATABASE_URL").is_ok()
}

/// Skip test with message if no database is available.
#[macro_export]
macro_rules! require_database {
    () => {
        if !crate::common::database_available() {
            eprintln!("skipping: DATABASE_URL not set");
            return;
        }
    };
}

/// Build the router over a lazy pool that never actually connects.
///
/// Good for every path that fails before its store round-trip: guard
/// rejections, field validation, unknown routes.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AuthManager>) {
    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect_lazy("postgres://postgres@localhost/torneo_test")
        .expect("lazy pool");
    let pool = Arc::new(pool);

    let auth_manager = Arc::new(AuthManager::new(pool.clone(), TEST_JWT_SECRET.to_string()));
    let state = AppState {
        auth_manager: auth_manager.clone(),
        tournament_manager: Arc::new(TournamentManager::new(pool.clone())),
        participant_manager: Arc::new(ParticipantManager::new(pool.clone())),
        pool,
    };

    (create_router(state), auth_manager)
}

/// Build the router over the database named by `DATABASE_URL`, creating the
/// tables if they do not exist yet.
#[allow(dead_code)]
pub async fn create_db_app() -> (axum::Router, Arc<sqlx::PgPool>) {
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to connect to test database");
    let pool = Arc::new(pool);

    setup_schema(&pool).await;

    let auth_manager = Arc::new(AuthManager::new(pool.clone(), TEST_JWT_SECRET.to_string()));
    let state = AppState {
        auth_manager,
        tournament_manager: Arc::new(TournamentManager::new(pool.clone())),
        participant_manager: Arc::new(ParticipantManager::new(pool.clone())),
        pool: pool.clone(),
    };

    (create_router(state), pool)
}

/// Idempotent DDL matching schema.sql at the repository root.
#[allow(dead_code)]
async fn setup_schema(pool: &sqlx::PgPool) {
    let statements = [
        r#"
        CREATE TABLE IF NOT EXISTS usuarios (
            id BIGSERIAL PRIMARY KEY,
            nombre TEXT NOT NULL,
            apellido TEXT NOT NULL,
            club TEXT NOT NULL,
            telefono TEXT NOT NULL,
            correo TEXT NOT NULL,
            usuario TEXT NOT NULL,
            contrasena TEXT NOT NULL,
            rol TEXT NOT NULL,
            UNIQUE (usuario, rol)
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS torneos (
            id BIGSERIAL PRIMARY KEY,
            nombre TEXT NOT NULL,
            club TEXT NOT NULL,
            participantes INTEGER NOT NULL,
            pistas INTEGER NOT NULL,
            grupos INTEGER NOT NULL,
            fecha DATE NOT NULL
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS participantes (
            id BIGSERIAL PRIMARY KEY,
            torneo_id BIGINT NOT NULL REFERENCES torneos (id),
            nombre TEXT NOT NULL,
            apellido TEXT NOT NULL,
            telefono TEXT NOT NULL,
            correo TEXT NOT NULL,
            club TEXT NOT NULL
        )
        "#,
    ];

    for statement in statements {
        sqlx::query(statement)
            .execute(pool)
            .await
            .expect("Failed to create test schema");
    }
}

/// Generate a unique login name for tests
#[allow(dead_code)]
pub fn unique_usuario(prefix: &str) -> String {
    let rand_id: u32 = rand::random();
    format!("{}_{}", prefix, rand_id % 100000)
}

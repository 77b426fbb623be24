//! HTTP server for the club tournament registration platform.
//!
//! Wires the domain managers from the `torneo` library to an axum router:
//! account registration and login, tournament creation/listing, and
//! participant enrollment, with bearer-token auth on the write endpoints.

use anyhow::Error;
use pico_args::Arguments;
use std::net::SocketAddr;
use std::sync::Arc;
use torneo::{
    auth::AuthManager,
    db::Database,
    participant::ParticipantManager,
    tournament::TournamentManager,
};
use torneo_server::{api, config::ServerConfig, logging};
use tracing::info;

const HELP: &str = "\
Run the tournament registration HTTP service

USAGE:
  torneo_server [OPTIONS]

OPTIONS:
  --bind       IP:PORT     Server socket bind address  [default: env SERVER_BIND or 0.0.0.0:5000]

FLAGS:
  -h, --help               Print help information

ENVIRONMENT:
  PORT                     Listening port when SERVER_BIND is unset (default 5000)
  SERVER_BIND              Full bind address (e.g., 0.0.0.0:8080)
  DB_HOST, DB_PORT         Database server coordinates
  DB_USER, DB_PASSWORD     Database credentials
  DB_NAME                  Database name
  JWT_SECRET               Token signing secret (required)
  (See .env file for all configuration options)
";

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let bind_override: Option<SocketAddr> = pargs.opt_value_from_str("--bind")?;

    logging::init();

    let config = ServerConfig::from_env(bind_override)?;

    // The store connection is established once, up front. A dead store at
    // startup terminates the process instead of serving requests into it.
    info!(
        "Connecting to database {} at {}:{}",
        config.database.name, config.database.host, config.database.port
    );
    let db = Database::new(&config.database)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to connect to database: {}", e))?;

    info!("Database connected successfully");

    let pool = Arc::new(db.pool().clone());
    let auth_manager = Arc::new(AuthManager::new(pool.clone(), config.jwt_secret.clone()));
    let tournament_manager = Arc::new(TournamentManager::new(pool.clone()));
    let participant_manager = Arc::new(ParticipantManager::new(pool.clone()));

    let state = api::AppState {
        auth_manager,
        tournament_manager,
        participant_manager,
        pool,
    };

    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to {}: {}", config.bind, e))?;

    info!(
        "Server is running at http://{}. Press Ctrl+C to stop.",
        config.bind
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    info!("Shutting down server...");

    Ok(())
}

/// Graceful shutdown signal
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install CTRL+C signal handler");
}

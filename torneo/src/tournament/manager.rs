//! Tournament manager for creating and listing tournaments.

use super::models::{NewTournament, Tournament, TournamentId};
use sqlx::{PgPool, Row};
use std::sync::Arc;
use thiserror::Error;

/// Tournament errors
#[derive(Debug, Error)]
pub enum TournamentError {
    #[error("error de base de datos: {0}")]
    Database(#[from] sqlx::Error),
}

pub type TournamentResult<T> = Result<T, TournamentError>;

/// Tournament manager
#[derive(Clone)]
pub struct TournamentManager {
    pool: Arc<PgPool>,
}

impl TournamentManager {
    /// Create a new tournament manager
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Create a new tournament and return its generated id
    pub async fn create(&self, tournament: NewTournament) -> TournamentResult<TournamentId> {
        let row = sqlx::query(
            r#"
            INSERT INTO torneos (nombre, club, participantes, pistas, grupos, fecha)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(&tournament.nombre)
        .bind(&tournament.club)
        .bind(tournament.participantes)
        .bind(tournament.pistas)
        .bind(tournament.grupos)
        .bind(tournament.fecha)
        .fetch_one(self.pool.as_ref())
        .await?;

        let id: TournamentId = row.get("id");
        log::debug!("torneo {} creado ({})", id, tournament.nombre);

        Ok(id)
    }

    /// List every tournament in store-native order.
    ///
    /// No ORDER BY on purpose: callers must not rely on any particular
    /// ordering of the result.
    pub async fn list(&self) -> TournamentResult<Vec<Tournament>> {
        let rows = sqlx::query(
            "SELECT id, nombre, club, participantes, pistas, grupos, fecha FROM torneos",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        let tournaments = rows
            .into_iter()
            .map(|row| Tournament {
                id: row.get("id"),
                nombre: row.get("nombre"),
                club: row.get("club"),
                participantes: row.get("participantes"),
                pistas: row.get("pistas"),
                grupos: row.get("grupos"),
                fecha: row.get("fecha"),
            })
            .collect();

        Ok(tournaments)
    }
}

//! Participant manager for enrolling and listing participants.

use super::models::{NewParticipant, Participant, ParticipantId};
use crate::tournament::TournamentId;
use sqlx::{PgPool, Row};
use std::sync::Arc;
use thiserror::Error;

/// Participant errors
#[derive(Debug, Error)]
pub enum ParticipantError {
    #[error("error de base de datos: {0}")]
    Database(#[from] sqlx::Error),
}

pub type ParticipantResult<T> = Result<T, ParticipantError>;

/// Participant manager
#[derive(Clone)]
pub struct ParticipantManager {
    pool: Arc<PgPool>,
}

impl ParticipantManager {
    /// Create a new participant manager
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Enroll a participant in a tournament and return the generated id
    pub async fn create(&self, participant: NewParticipant) -> ParticipantResult<ParticipantId> {
        let row = sqlx::query(
            r#"
            INSERT INTO participantes (torneo_id, nombre, apellido, telefono, correo, club)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(participant.torneo_id)
        .bind(&participant.nombre)
        .bind(&participant.apellido)
        .bind(&participant.telefono)
        .bind(&participant.correo)
        .bind(&participant.club)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.get("id"))
    }

    /// List the participants enrolled in one tournament, store-native order
    pub async fn list_for_tournament(
        &self,
        torneo_id: TournamentId,
    ) -> ParticipantResult<Vec<Participant>> {
        let rows = sqlx::query(
            r#"
            SELECT id, torneo_id, nombre, apellido, telefono, correo, club
            FROM participantes
            WHERE torneo_id = $1
            "#,
        )
        .bind(torneo_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        let participants = rows
            .into_iter()
            .map(|row| Participant {
                id: row.get("id"),
                torneo_id: row.get("torneo_id"),
                nombre: row.get("nombre"),
                apellido: row.get("apellido"),
                telefono: row.get("telefono"),
                correo: row.get("correo"),
                club: row.get("club"),
            })
            .collect();

        Ok(participants)
    }
}

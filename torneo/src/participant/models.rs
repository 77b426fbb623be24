//! Participant data models.

use crate::tournament::TournamentId;
use serde::{Deserialize, Serialize};

/// Participant ID type
pub type ParticipantId = i64;

/// Participant row, always scoped to one tournament.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    #[serde(rename = "torneoId")]
    pub torneo_id: TournamentId,
    pub nombre: String,
    pub apellido: String,
    pub telefono: String,
    pub correo: String,
    pub club: String,
}

/// Fields required to enroll a participant.
///
/// Whether `torneo_id` points at a real tournament is the store's business
/// (foreign key), not the application layer's.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewParticipant {
    #[serde(rename = "torneoId")]
    pub torneo_id: TournamentId,
    pub nombre: String,
    pub apellido: String,
    pub telefono: String,
    pub correo: String,
    pub club: String,
}

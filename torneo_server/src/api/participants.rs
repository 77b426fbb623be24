//! Participant API handlers.

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use torneo::participant::{NewParticipant, Participant};
use torneo::tournament::TournamentId;

use super::{AppState, error::ApiError, require_field, require_number};

#[derive(Debug, Deserialize)]
pub struct CreateParticipantPayload {
    #[serde(rename = "torneoId")]
    pub torneo_id: Option<TournamentId>,
    pub nombre: Option<String>,
    pub apellido: Option<String>,
    pub telefono: Option<String>,
    pub correo: Option<String>,
    pub club: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ListParticipantsQuery {
    #[serde(rename = "torneoId")]
    pub torneo_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Enroll a participant in a tournament.
///
/// Runs behind the session guard and the organizador role gate. The
/// tournament reference plus the five identity fields are required (400
/// otherwise). Whether the reference points at a real tournament is the
/// store's business; a violated foreign key surfaces as a generic 500.
pub async fn create_participant(
    State(state): State<AppState>,
    Json(payload): Json<CreateParticipantPayload>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let participant = NewParticipant {
        torneo_id: require_number(payload.torneo_id)?,
        nombre: require_field(payload.nombre)?,
        apellido: require_field(payload.apellido)?,
        telefono: require_field(payload.telefono)?,
        correo: require_field(payload.correo)?,
        club: require_field(payload.club)?,
    };

    state.participant_manager.create(participant).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Participante registrado correctamente".to_string(),
        }),
    ))
}

/// List the participants of one tournament.
///
/// Public endpoint. The `torneoId` query parameter is required; rows come
/// back in store-native order.
pub async fn list_participants(
    State(state): State<AppState>,
    Query(query): Query<ListParticipantsQuery>,
) -> Result<Json<Vec<Participant>>, ApiError> {
    let raw = query
        .torneo_id
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApiError::Validation("Falta el parámetro torneoId".to_string()))?;

    let torneo_id: TournamentId = raw
        .parse()
        .map_err(|_| ApiError::Validation("El parámetro torneoId debe ser numérico".to_string()))?;

    let participants = state
        .participant_manager
        .list_for_tournament(torneo_id)
        .await?;

    Ok(Json(participants))
}

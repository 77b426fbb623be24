//! Tournament API handlers.

use axum::{Json, extract::State, http::StatusCode};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use torneo::tournament::{NewTournament, Tournament, TournamentId};

use super::{AppState, error::ApiError, require_field, require_number};

#[derive(Debug, Deserialize)]
pub struct CreateTournamentPayload {
    pub nombre: Option<String>,
    pub club: Option<String>,
    pub participantes: Option<i32>,
    pub pistas: Option<i32>,
    pub grupos: Option<i32>,
    pub fecha: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreateTournamentResponse {
    pub message: String,
    #[serde(rename = "torneoId")]
    pub torneo_id: TournamentId,
}

/// Create a tournament.
///
/// Runs behind the session guard and the organizador role gate. All six
/// fields are required (400 otherwise); `fecha` must be `AAAA-MM-DD`.
/// Answers 201 with the generated id.
pub async fn create_tournament(
    State(state): State<AppState>,
    Json(payload): Json<CreateTournamentPayload>,
) -> Result<(StatusCode, Json<CreateTournamentResponse>), ApiError> {
    let fecha_raw = require_field(payload.fecha)?;
    let fecha = NaiveDate::parse_from_str(&fecha_raw, "%Y-%m-%d")
        .map_err(|_| ApiError::Validation("Fecha inválida, se espera AAAA-MM-DD".to_string()))?;

    let tournament = NewTournament {
        nombre: require_field(payload.nombre)?,
        club: require_field(payload.club)?,
        participantes: require_number(payload.participantes)?,
        pistas: require_number(payload.pistas)?,
        grupos: require_number(payload.grupos)?,
        fecha,
    };

    let torneo_id = state.tournament_manager.create(tournament).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateTournamentResponse {
            message: "Torneo creado correctamente".to_string(),
            torneo_id,
        }),
    ))
}

/// List every tournament.
///
/// Public endpoint; rows come back in store-native order.
pub async fn list_tournaments(
    State(state): State<AppState>,
) -> Result<Json<Vec<Tournament>>, ApiError> {
    let tournaments = state.tournament_manager.list().await?;
    Ok(Json(tournaments))
}

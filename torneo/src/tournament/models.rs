//! Tournament data models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Tournament ID type
pub type TournamentId = i64;

/// Tournament row.
///
/// `fecha` serializes as `AAAA-MM-DD`, matching the DATE column it comes
/// from; the remaining field names are the wire contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub nombre: String,
    pub club: String,
    pub participantes: i32,
    pub pistas: i32,
    pub grupos: i32,
    pub fecha: NaiveDate,
}

/// Fields required to create a tournament.
///
/// Presence and format validation happens at the HTTP layer before this
/// struct is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTournament {
    pub nombre: String,
    pub club: String,
    pub participantes: i32,
    pub pistas: i32,
    pub grupos: i32,
    pub fecha: NaiveDate,
}

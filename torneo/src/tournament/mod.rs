//! Tournament creation and listing.

pub mod manager;
pub mod models;

pub use manager::{TournamentError, TournamentManager, TournamentResult};
pub use models::{NewTournament, Tournament, TournamentId};

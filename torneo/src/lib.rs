//! # Torneo
//!
//! Core library for a club tournament registration platform.
//!
//! The platform backs a small HTTP service that registers user accounts with
//! roles, authenticates them with short-lived signed tokens, and lets the
//! `organizador` role create tournaments and enroll participants against
//! them. Everything is thin CRUD over PostgreSQL; each operation performs a
//! single store round-trip and maps the outcome to a typed result.
//!
//! ## Core Modules
//!
//! - [`auth`]: account registration, login, and access-token issue/verify
//! - [`tournament`]: tournament creation and listing
//! - [`participant`]: participant enrollment and per-tournament listing
//! - [`db`]: PostgreSQL connection pooling and configuration

pub mod auth;
pub use auth::{
    AccessTokenClaims, Account, AccountId, AuthError, AuthManager, AuthResult, LoginRequest,
    ROL_ORGANIZADOR, RegisterRequest,
};

pub mod tournament;
pub use tournament::{
    NewTournament, Tournament, TournamentError, TournamentId, TournamentManager, TournamentResult,
};

pub mod participant;
pub use participant::{
    NewParticipant, Participant, ParticipantError, ParticipantId, ParticipantManager,
    ParticipantResult,
};

pub mod db;
pub use db::{Database, DatabaseConfig};

//! Broadside Protocol - Shared types for the lobby HTTP API
//!
//! This crate contains the wire-format DTOs exchanged between the lobby
//! server and its clients.
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde and serde_json
//! 2. **No business logic** - Pure data types and serialization
//! 3. **No domain IDs** - ids and codes travel as plain strings
//! 4. **camelCase on the wire** - field names match existing clients

pub mod requests;
pub mod responses;

pub use requests::{CreateGameRequest, JoinGameRequest};
pub use responses::{
    ErrorResponse, GameData, GameResponse, GameStatusData, HealthResponse, PlayerData,
    PublicGamesResponse,
};

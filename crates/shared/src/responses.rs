//! Response bodies for the lobby endpoints.
//!
//! Every lobby response carries a `success` flag; failures add an `error`
//! message and omit the payload.

use serde::{Deserialize, Serialize};

// =============================================================================
// Game payloads
// =============================================================================

/// Status of a game as clients see it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameStatusData {
    Waiting,
    InProgress,
    Finished,
}

/// A player seated in a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerData {
    pub id: String,
    pub username: String,
    pub ready: bool,
}

/// A game lobby.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameData {
    pub id: String,
    pub host: PlayerData,
    /// Host first, then guests in join order.
    pub players: Vec<PlayerData>,
    pub is_private: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invite_code: Option<String>,
    pub status: GameStatusData,
    /// ISO-8601 UTC with milliseconds.
    pub created_at: String,
}

// =============================================================================
// Envelopes
// =============================================================================

/// Response to create and join.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game: Option<GameData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GameResponse {
    pub fn ok(game: GameData) -> Self {
        Self {
            success: true,
            game: Some(game),
            error: None,
        }
    }
}

/// Response to the public listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicGamesResponse {
    pub success: bool,
    pub games: Vec<GameData>,
}

impl PublicGamesResponse {
    pub fn ok(games: Vec<GameData>) -> Self {
        Self {
            success: true,
            games,
        }
    }
}

/// Body of every failed lobby request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

/// `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

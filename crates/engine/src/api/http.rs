//! HTTP routes.

use axum::{
    extract::{
        rejection::{FormRejection, JsonRejection},
        State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

use broadside_domain::common::{format_iso8601, non_blank};
use broadside_shared::{
    CreateGameRequest, ErrorResponse, GameResponse, HealthResponse, JoinGameRequest,
    PublicGamesResponse,
};

use super::dto::game_data;
use super::extract::LobbyBody;
use crate::app::App;
use crate::use_cases::lobby::{CreateSessionError, JoinSessionError, JoinSessionInput};

const INVALID_BODY: &str = "Invalid request body";
const IS_PRIVATE_NOT_BOOLEAN: &str = "isPrivate must be a boolean";
const USERNAME_REQUIRED: &str = "Username is required";

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/health", get(health))
        .route("/api/games", post(create_game))
        .route("/api/games/join", post(join_game))
        .route("/api/games/public", get(list_public_games))
}

async fn health(State(app): State<Arc<App>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "Server is running".to_string(),
        timestamp: format_iso8601(app.clock.now()),
    })
}

// =============================================================================
// Games
// =============================================================================

async fn create_game(
    State(app): State<Arc<App>>,
    LobbyBody(request): LobbyBody<CreateGameRequest>,
) -> Result<Json<GameResponse>, ApiError> {
    let username = non_blank(request.username.as_deref())
        .ok_or_else(|| ApiError::BadRequest(USERNAME_REQUIRED.to_string()))?;
    let is_private = request
        .is_private_flag()
        .ok_or_else(|| ApiError::BadRequest(IS_PRIVATE_NOT_BOOLEAN.to_string()))?;

    let session = app
        .use_cases
        .lobby
        .create
        .execute(username, is_private)
        .await?;
    Ok(Json(GameResponse::ok(game_data(&session))))
}

async fn join_game(
    State(app): State<Arc<App>>,
    LobbyBody(request): LobbyBody<JoinGameRequest>,
) -> Result<Json<GameResponse>, ApiError> {
    let session = app
        .use_cases
        .lobby
        .join
        .execute(JoinSessionInput {
            player_name: request.username.unwrap_or_default(),
            session_id: request.game_id,
            invite_code: request.invite_code,
        })
        .await?;
    Ok(Json(GameResponse::ok(game_data(&session))))
}

async fn list_public_games(State(app): State<Arc<App>>) -> Json<PublicGamesResponse> {
    let sessions = app.use_cases.lobby.list_public.execute().await;
    Json(PublicGamesResponse::ok(
        sessions.iter().map(game_data).collect(),
    ))
}

// =============================================================================
// Errors
// =============================================================================

/// API errors, rendered as `{ "success": false, "error": ... }`.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(msg))).into_response()
            }
            ApiError::Internal(detail) => {
                tracing::error!(error = %detail, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new("Internal server error")),
                )
                    .into_response()
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self {
        tracing::debug!(error = %e.body_text(), "Rejected request body");
        ApiError::BadRequest(INVALID_BODY.to_string())
    }
}

impl From<FormRejection> for ApiError {
    fn from(e: FormRejection) -> Self {
        tracing::debug!(error = %e.body_text(), "Rejected form body");
        ApiError::BadRequest(INVALID_BODY.to_string())
    }
}

impl From<CreateSessionError> for ApiError {
    fn from(e: CreateSessionError) -> Self {
        match e {
            CreateSessionError::Validation(e) => ApiError::BadRequest(e.to_string()),
            CreateSessionError::Registry(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<JoinSessionError> for ApiError {
    fn from(e: JoinSessionError) -> Self {
        match e {
            JoinSessionError::Internal(detail) => ApiError::Internal(detail),
            other => ApiError::BadRequest(other.to_string()),
        }
    }
}

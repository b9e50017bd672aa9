//! Shared harness for the lobby flow tests.

use std::sync::Arc;

use axum::{body::Body, http::Request, http::StatusCode, Router};
use broadside_shared::{CreateGameRequest, GameData, GameResponse, JoinGameRequest};
use chrono::{TimeZone, Utc};
use serde_json::Value;
use tower::ServiceExt;

use crate::infrastructure::clock::{FixedClock, ScriptedRandom};
use crate::App;

/// A router over a fresh, empty registry.
#[derive(Clone)]
pub struct LobbyHarness {
    pub app: Arc<App>,
    router: Router,
}

impl LobbyHarness {
    pub fn new() -> Self {
        let clock = Arc::new(FixedClock(
            Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap(),
        ));
        let app = Arc::new(App::new(None, clock, Arc::new(ScriptedRandom::new())));
        let router = crate::api::routes().with_state(app.clone());
        Self { app, router }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    pub async fn post(&self, uri: &str, body: &impl serde::Serialize) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap();
        self.send(request).await
    }

    /// Create a game and return it, panicking on failure.
    pub async fn create(&self, username: &str, is_private: bool) -> GameData {
        let (status, body) = self
            .post("/api/games", &CreateGameRequest::new(username, is_private))
            .await;
        assert_eq!(status, StatusCode::OK, "create failed: {body}");
        game(body)
    }

    pub async fn join(&self, request: &JoinGameRequest) -> (StatusCode, Value) {
        self.post("/api/games/join", request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }
}

/// Decode the `game` of a successful response body.
pub fn game(body: Value) -> GameData {
    let response: GameResponse = serde_json::from_value(body).unwrap();
    assert!(response.success);
    response.game.unwrap()
}

pub fn join_request(username: &str) -> JoinGameRequest {
    JoinGameRequest {
        username: Some(username.to_string()),
        ..Default::default()
    }
}

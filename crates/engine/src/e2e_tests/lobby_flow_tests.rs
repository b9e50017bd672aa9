//! Create, list, and join flows over HTTP.

use std::collections::HashSet;

use axum::http::StatusCode;
use broadside_domain::common::parse_datetime;
use broadside_shared::{JoinGameRequest, PublicGamesResponse};

use super::{game, join_request, LobbyHarness};

#[tokio::test]
async fn host_and_guest_fill_a_public_game() {
    let lobby = LobbyHarness::new();
    let created = lobby.create("alice", false).await;

    let (status, body) = lobby.join(&join_request("bob")).await;
    assert_eq!(status, StatusCode::OK);
    let joined = game(body);

    assert_eq!(joined.id, created.id);
    assert_eq!(joined.host, created.host);
    assert_eq!(joined.created_at, created.created_at);
    assert!(parse_datetime(&joined.created_at).is_ok());
    let names: Vec<_> = joined.players.iter().map(|p| p.username.as_str()).collect();
    assert_eq!(names, ["alice", "bob"]);
    assert_ne!(joined.players[0].id, joined.players[1].id);

    // Full games stay listed but no longer match
    let (_, body) = lobby.get("/api/games/public").await;
    let listed: PublicGamesResponse = serde_json::from_value(body).unwrap();
    assert_eq!(listed.games.len(), 1);
    assert_eq!(listed.games[0].players.len(), 2);

    let (status, body) = lobby.join(&join_request("carol")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No available public games");
}

#[tokio::test]
async fn private_games_are_hidden_but_reachable() {
    let lobby = LobbyHarness::new();
    let private = lobby.create("alice", true).await;
    let public = lobby.create("dave", false).await;

    let (status, body) = lobby.get("/api/games/public").await;
    assert_eq!(status, StatusCode::OK);
    let listed: PublicGamesResponse = serde_json::from_value(body).unwrap();
    let ids: Vec<_> = listed.games.iter().map(|g| g.id.as_str()).collect();
    assert_eq!(ids, [public.id.as_str()]);

    // Matchmaking skips the private game even though it was created first
    let (_, body) = lobby.join(&join_request("bob")).await;
    assert_eq!(game(body).id, public.id);

    let code = private.invite_code.clone().unwrap();
    let (status, body) = lobby
        .join(&JoinGameRequest {
            invite_code: Some(code.to_lowercase()),
            ..join_request("erin")
        })
        .await;
    assert_eq!(status, StatusCode::OK);
    let joined = game(body);
    assert_eq!(joined.id, private.id);
    assert_eq!(joined.invite_code, Some(code));
}

#[tokio::test]
async fn identifiers_are_unique_across_games() {
    let lobby = LobbyHarness::new();
    let mut session_ids = HashSet::new();
    let mut player_ids = HashSet::new();
    let mut codes = HashSet::new();

    for i in 0..10 {
        let created = lobby.create(&format!("host{i}"), i % 2 == 0).await;
        assert!(session_ids.insert(created.id));
        assert!(player_ids.insert(created.host.id));
        if let Some(code) = created.invite_code {
            assert!(codes.insert(code));
        }
    }
    assert_eq!(lobby.app.sessions.len().await, 10);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_joins_seat_exactly_one_guest() {
    let lobby = LobbyHarness::new();
    let created = lobby.create("alice", false).await;

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let lobby = lobby.clone();
            let request = JoinGameRequest {
                game_id: Some(created.id.clone()),
                ..join_request(&format!("guest{i}"))
            };
            tokio::spawn(async move { lobby.join(&request).await })
        })
        .collect();

    let mut seated = 0;
    for handle in handles {
        let (status, body) = handle.await.unwrap();
        if status == StatusCode::OK {
            seated += 1;
        } else {
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["error"], "Game is full");
        }
    }
    assert_eq!(seated, 1);

    let (_, body) = lobby.get("/api/games/public").await;
    let listed: PublicGamesResponse = serde_json::from_value(body).unwrap();
    assert_eq!(listed.games[0].players.len(), 2);
}

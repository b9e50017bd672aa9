//! Request bodies for the lobby endpoints.
//!
//! Every field is optional at the serde level so that a missing field is
//! reported as a validation message rather than a body rejection.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `POST /api/games`
///
/// `is_private` keeps whatever JSON value the client sent, so the server can
/// tell a missing flag or a non-boolean apart from a malformed body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub is_private: Option<Value>,
}

impl CreateGameRequest {
    pub fn new(username: impl Into<String>, is_private: bool) -> Self {
        Self {
            username: Some(username.into()),
            is_private: Some(Value::Bool(is_private)),
        }
    }

    /// The privacy flag, if the client sent a boolean.
    pub fn is_private_flag(&self) -> Option<bool> {
        self.is_private.as_ref().and_then(Value::as_bool)
    }
}

/// `POST /api/games/join`
///
/// With neither `game_id` nor `invite_code` the server matches the player
/// into any open public game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinGameRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invite_code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_reads_camel_case() {
        let req: CreateGameRequest =
            serde_json::from_str(r#"{"username":"alice","isPrivate":true}"#).unwrap();
        assert_eq!(req.username.as_deref(), Some("alice"));
        assert_eq!(req.is_private_flag(), Some(true));
    }

    #[test]
    fn non_boolean_privacy_flag_is_kept_but_not_a_flag() {
        let req: CreateGameRequest =
            serde_json::from_str(r#"{"username":"alice","isPrivate":"yes"}"#).unwrap();
        assert_eq!(req.is_private, Some(Value::String("yes".to_string())));
        assert_eq!(req.is_private_flag(), None);

        let req: CreateGameRequest =
            serde_json::from_str(r#"{"username":"alice","isPrivate":null}"#).unwrap();
        assert_eq!(req.is_private_flag(), None);
    }

    #[test]
    fn missing_fields_default_to_none() {
        let req: JoinGameRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req, JoinGameRequest::default());
    }

    #[test]
    fn join_request_accepts_null_game_id() {
        let req: JoinGameRequest =
            serde_json::from_str(r#"{"username":"bob","gameId":null,"inviteCode":"ab12cd"}"#)
                .unwrap();
        assert_eq!(req.game_id, None);
        assert_eq!(req.invite_code.as_deref(), Some("ab12cd"));
    }
}

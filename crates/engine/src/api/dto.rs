//! Domain to wire conversions.

use broadside_domain::common::format_iso8601;
use broadside_domain::{Participant, Session, SessionStatus};
use broadside_shared::{GameData, GameStatusData, PlayerData};

pub fn game_data(session: &Session) -> GameData {
    GameData {
        id: session.id().to_string(),
        host: player_data(session.host()),
        players: session.participants().map(player_data).collect(),
        is_private: session.is_private(),
        invite_code: session.invite_code().map(ToString::to_string),
        status: status_data(session.status()),
        created_at: format_iso8601(session.created_at()),
    }
}

pub fn player_data(participant: &Participant) -> PlayerData {
    PlayerData {
        id: participant.id().to_string(),
        username: participant.name().to_string(),
        ready: participant.is_ready(),
    }
}

pub fn status_data(status: SessionStatus) -> GameStatusData {
    match status {
        SessionStatus::Waiting => GameStatusData::Waiting,
        SessionStatus::InProgress => GameStatusData::InProgress,
        SessionStatus::Finished => GameStatusData::Finished,
    }
}

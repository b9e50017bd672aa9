//! Broadside Domain - lobby sessions and the rules that keep them consistent.
//!
//! ## Structure
//!
//! - `aggregates/` - `Session`, the consistency boundary for capacity and visibility
//! - `entities/` - `Participant`
//! - `value_objects/` - validated `PlayerName` and `InviteCode`
//! - `ids` - opaque token identifiers

extern crate self as broadside_domain;

pub mod aggregates;
pub mod common;
pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use aggregates::{Session, SessionStatus, Visibility, SESSION_CAPACITY};
pub use entities::Participant;
pub use error::DomainError;
pub use ids::{ParticipantId, SessionId, ID_ALPHABET, ID_LENGTH};
pub use value_objects::{InviteCode, PlayerName, INVITE_CODE_ALPHABET, INVITE_CODE_LENGTH};

//! Value objects - Immutable objects defined by their attributes

mod invite_code;
mod names;

pub use invite_code::{InviteCode, INVITE_CODE_ALPHABET, INVITE_CODE_LENGTH};
pub use names::PlayerName;

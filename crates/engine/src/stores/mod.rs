//! In-memory state storage modules.
//!
//! Stores manage runtime state that lives only as long as the process:
//! - `SessionStore` - the lobby session registry
//! - `IdGenerator` - collision-checked identifiers and invite codes

pub mod ids;
pub mod session;

// Re-export store types
pub use ids::{IdGenerator, TokenKind, TokenSpaceExhausted};
pub use session::{JoinTarget, LobbyError, SessionStore};

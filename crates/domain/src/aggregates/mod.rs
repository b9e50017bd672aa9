//! Aggregates - consistency boundaries of the lobby

pub mod session;

pub use session::{Session, SessionStatus, Visibility, SESSION_CAPACITY};

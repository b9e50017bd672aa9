//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific domain area.
//! Use cases validate input, call into stores, and log outcomes.

pub mod lobby;
pub mod validation;

// Re-export main types
pub use lobby::LobbyUseCases;

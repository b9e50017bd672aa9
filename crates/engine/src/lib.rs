//! Broadside Engine library.
//!
//! This crate contains the lobby server: the session registry, the use cases
//! around it, and the HTTP API.
//!
//! ## Structure
//!
//! - `stores/` - In-memory session registry and identifier generation
//! - `use_cases/` - Create, join, list, and evict flows
//! - `infrastructure/` - Ports, clock/random adapters, configuration
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod stores;
pub mod use_cases;

/// Multi-request flows driven through the HTTP router.
#[cfg(test)]
mod e2e_tests;

pub use app::App;

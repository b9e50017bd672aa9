//! End-to-end lobby tests.
//!
//! These drive the full router built from a real [`App`](crate::App), with a
//! fixed clock and scripted randomness so responses are reproducible.
//!
//! ```bash
//! cargo test -p broadside-engine --lib e2e_tests
//! ```

mod e2e_helpers;
mod lobby_flow_tests;

pub use e2e_helpers::*;

//! Common utility functions shared across the Broadside crates.
//!
//! # Design Principles
//!
//! - **Pure functions only** - no side effects, no I/O
//! - **Minimal dependencies** - only chrono for datetime utilities

pub mod datetime;
pub mod string;

// Re-export commonly used functions at crate root for convenience
pub use datetime::{format_iso8601, parse_datetime};
pub use string::{none_if_blank, non_blank};

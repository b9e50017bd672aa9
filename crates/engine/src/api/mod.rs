//! API layer - HTTP entry points.

pub mod dto;
pub mod extract;
pub mod http;

pub use http::{routes, ApiError};

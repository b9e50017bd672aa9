//! Application configuration

use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Interface the HTTP server binds to
    pub server_host: String,
    /// HTTP server port
    pub server_port: u16,
    /// CORS allowed origins (comma-separated, or "*" for any)
    pub cors_allowed_origins: Vec<String>,
    /// Session lifetime configuration
    pub session: SessionConfig,
}

/// Session lifetime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Sessions older than this are evicted (0 disables eviction)
    pub ttl_seconds: u64,
    /// How often the eviction sweep runs
    pub sweep_interval_seconds: u64,
}

impl SessionConfig {
    /// Maximum session age, or `None` when eviction is disabled.
    pub fn ttl(&self) -> Option<chrono::Duration> {
        if self.ttl_seconds == 0 {
            return None;
        }
        chrono::Duration::try_seconds(i64::try_from(self.ttl_seconds).ok()?)
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_seconds.max(1))
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            server_host: lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),

            server_port: lookup("SERVER_PORT")
                .or_else(|| lookup("PORT"))
                .unwrap_or_else(|| "3000".to_string())
                .trim()
                .parse()
                .context("SERVER_PORT must be a valid port number")?,

            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|| "*".to_string())
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),

            session: SessionConfig {
                ttl_seconds: lookup("SESSION_TTL_SECONDS")
                    .unwrap_or_else(|| "7200".to_string())
                    .trim()
                    .parse()
                    .context("SESSION_TTL_SECONDS must be a whole number of seconds")?,
                sweep_interval_seconds: lookup("SESSION_SWEEP_INTERVAL_SECONDS")
                    .unwrap_or_else(|| "60".to_string())
                    .trim()
                    .parse()
                    .context("SESSION_SWEEP_INTERVAL_SECONDS must be a whole number of seconds")?,
            },
        })
    }
}

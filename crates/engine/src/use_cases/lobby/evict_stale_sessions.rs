use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::infrastructure::ports::ClockPort;
use crate::stores::SessionStore;

/// Use case for dropping sessions that outlived the configured TTL.
///
/// Nothing else ever removes a session, so without this sweep abandoned
/// lobbies accumulate for the lifetime of the process.
pub struct EvictStaleSessions {
    sessions: Arc<SessionStore>,
    clock: Arc<dyn ClockPort>,
    ttl: Option<chrono::Duration>,
}

impl EvictStaleSessions {
    /// `ttl = None` disables eviction.
    pub fn new(
        sessions: Arc<SessionStore>,
        clock: Arc<dyn ClockPort>,
        ttl: Option<chrono::Duration>,
    ) -> Self {
        Self {
            sessions,
            clock,
            ttl,
        }
    }

    /// Run one sweep. Returns how many sessions were removed.
    pub async fn execute(&self) -> usize {
        let Some(ttl) = self.ttl else {
            return 0;
        };
        let Some(cutoff) = self.clock.now().checked_sub_signed(ttl) else {
            // A TTL reaching before the earliest representable time keeps everything
            return 0;
        };
        let evicted = self.sessions.evict_created_before(cutoff).await;
        for session_id in &evicted {
            tracing::debug!(session_id = %session_id, "Evicted stale session");
        }
        if !evicted.is_empty() {
            let remaining = self.sessions.len().await;
            tracing::info!(
                evicted = evicted.len(),
                remaining,
                "Session sweep complete"
            );
        }
        evicted.len()
    }

    /// Sweep every `interval` until `cancel` fires.
    pub async fn run_worker(self: Arc<Self>, interval: Duration, cancel: CancellationToken) {
        if self.ttl.is_none() {
            tracing::info!("Session eviction disabled");
            return;
        }
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::info!("Session sweeper stopping");
                    break;
                }
                _ = ticker.tick() => {
                    self.execute().await;
                }
            }
        }
    }
}

//! Webhook replay protection: Telegram redelivers updates it did not see acknowledged.

use std::collections::{HashSet, VecDeque};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::observability::GuardEvent;

const DEFAULT_DEDUP_TTL_SECS: u64 = 600;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookDedupConfig {
    /// How long an `update_id` is remembered.
    pub ttl_secs: u64,
}

impl Default for WebhookDedupConfig {
    fn default() -> Self {
        Self {
            ttl_secs: DEFAULT_DEDUP_TTL_SECS,
        }
    }
}

impl WebhookDedupConfig {
    pub fn from_ttl_setting(ttl_secs: Option<u64>) -> Self {
        Self {
            ttl_secs: ttl_secs.unwrap_or(DEFAULT_DEDUP_TTL_SECS),
        }
        .normalized()
    }

    /// Zero TTL is raised to one second.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.ttl_secs = self.ttl_secs.max(1);
        self
    }

    pub fn build_store(&self) -> Arc<dyn UpdateDeduplicator> {
        let ttl_secs = self.clone().normalized().ttl_secs;
        tracing::info!(ttl_secs, "telegram webhook dedup window initialized");
        Arc::new(RecentUpdates::new(Duration::from_secs(ttl_secs)))
    }
}

/// At-most-once gate for webhook deliveries.
#[async_trait]
pub trait UpdateDeduplicator: Send + Sync {
    /// Claim `update_id`; `true` when it was already claimed inside the window.
    async fn is_duplicate(&self, update_id: i64) -> Result<bool>;

    /// Give a claim back after the update could not be enqueued, so that
    /// Telegram's redelivery is processed.
    async fn release(&self, update_id: i64) -> Result<()>;
}

/// Process-local window of recently accepted update ids, oldest first.
struct RecentUpdates {
    ttl: Duration,
    window: Mutex<Window>,
}

#[derive(Default)]
struct Window {
    arrivals: VecDeque<(Instant, i64)>,
    ids: HashSet<i64>,
}

impl Window {
    fn expire(&mut self, now: Instant, ttl: Duration) {
        while let Some(&(accepted_at, update_id)) = self.arrivals.front() {
            if now.duration_since(accepted_at) < ttl {
                break;
            }
            self.arrivals.pop_front();
            self.ids.remove(&update_id);
        }
    }
}

impl RecentUpdates {
    fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            window: Mutex::new(Window::default()),
        }
    }
}

#[async_trait]
impl UpdateDeduplicator for RecentUpdates {
    async fn is_duplicate(&self, update_id: i64) -> Result<bool> {
        let now = Instant::now();
        let mut window = self.window.lock().await;
        window.expire(now, self.ttl);

        if !window.ids.insert(update_id) {
            tracing::debug!(
                event = GuardEvent::DedupDuplicateDetected.as_str(),
                update_id,
                "telegram webhook duplicate update detected"
            );
            return Ok(true);
        }
        window.arrivals.push_back((now, update_id));
        tracing::debug!(
            event = GuardEvent::DedupUpdateAccepted.as_str(),
            update_id,
            tracked_ids = window.ids.len(),
            "telegram webhook update accepted"
        );
        Ok(false)
    }

    async fn release(&self, update_id: i64) -> Result<()> {
        let mut window = self.window.lock().await;
        if window.ids.remove(&update_id) {
            window.arrivals.retain(|&(_, id)| id != update_id);
            tracing::debug!(update_id, "telegram webhook update released for redelivery");
        }
        Ok(())
    }
}

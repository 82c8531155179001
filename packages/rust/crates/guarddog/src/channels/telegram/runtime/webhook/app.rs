use axum::{Router, routing::post};
use tokio::sync::mpsc;

use crate::channels::telegram::idempotency::WebhookDedupConfig;
use crate::runtime::InboundUpdate;

use super::handler::telegram_webhook_handler;
use super::path::normalize_webhook_path;
use super::state::TelegramWebhookState;

/// Built webhook components for Telegram handler testing and runtime wiring.
pub struct TelegramWebhookApp {
    /// Axum router that serves Telegram webhook endpoint.
    pub app: Router,
    /// Normalized webhook route path.
    pub path: String,
    /// Normalized dedup config actually used by this app.
    pub dedup_config: WebhookDedupConfig,
}

/// Build the webhook router forwarding parsed updates into `tx`.
pub fn build_telegram_webhook_app(
    webhook_path: &str,
    secret_token: Option<String>,
    dedup_config: WebhookDedupConfig,
    tx: mpsc::Sender<InboundUpdate>,
) -> TelegramWebhookApp {
    let dedup_config = dedup_config.normalized();
    let webhook_state = TelegramWebhookState {
        tx,
        secret_token,
        deduplicator: dedup_config.build_store(),
    };

    let path = normalize_webhook_path(webhook_path);
    let app = Router::new()
        .route(&path, post(telegram_webhook_handler))
        .with_state(webhook_state);

    TelegramWebhookApp {
        app,
        path,
        dedup_config,
    }
}

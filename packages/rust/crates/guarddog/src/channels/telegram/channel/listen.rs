use std::time::Duration;

use serde_json::Value;
use tokio::sync::mpsc;

use crate::observability::GuardEvent;
use crate::runtime::InboundUpdate;

use super::TelegramChannel;
use super::constants::{
    TELEGRAM_ALLOWED_UPDATES, TELEGRAM_POLL_CONFLICT_RETRY_SECS,
    TELEGRAM_POLL_DEFAULT_RATE_LIMIT_RETRY_SECS, TELEGRAM_POLL_MAX_RATE_LIMIT_RETRY_SECS,
    TELEGRAM_POLL_RETRY_SECS, TELEGRAM_POLL_TIMEOUT_SECS,
};
use super::error::TelegramApiError;
use super::parsing::parse_telegram_update;

impl TelegramChannel {
    /// Long-poll `getUpdates` and forward parsed updates until the receiver is dropped.
    ///
    /// A rejected token ends polling with an error; any other failure backs off
    /// and polls again.
    pub async fn listen(&self, tx: mpsc::Sender<InboundUpdate>) -> anyhow::Result<()> {
        let mut offset: i64 = 0;
        tracing::info!("Telegram channel listening for membership updates...");
        loop {
            let updates = match self.fetch_updates(offset).await {
                Ok(updates) => updates,
                Err(error) => {
                    tokio::time::sleep(poll_backoff(&error)?).await;
                    continue;
                }
            };

            for update in &updates {
                if let Some(update_id) = update.get("update_id").and_then(Value::as_i64) {
                    offset = offset.max(update_id + 1);
                }
                let Some(parsed) = parse_telegram_update(update) else {
                    tracing::debug!(
                        event = GuardEvent::UpdateIgnored.as_str(),
                        update_id = ?update.get("update_id"),
                        "Update not relevant for moderation; ignoring"
                    );
                    continue;
                };
                if tx.send(parsed).await.is_err() {
                    tracing::info!("Moderation inbound queue closed; polling stopped");
                    return Ok(());
                }
            }
        }
    }

    async fn fetch_updates(&self, offset: i64) -> Result<Vec<Value>, TelegramApiError> {
        let body = serde_json::json!({
            "offset": offset,
            "timeout": TELEGRAM_POLL_TIMEOUT_SECS,
            "allowed_updates": TELEGRAM_ALLOWED_UPDATES,
        });
        match self.call_api("getUpdates", &body).await? {
            Value::Array(updates) => Ok(updates),
            Value::Null => Ok(Vec::new()),
            other => Err(TelegramApiError::malformed(format!(
                "getUpdates result is not a list: {other}"
            ))),
        }
    }
}

/// Delay before the next poll, or an error when polling cannot recover.
fn poll_backoff(error: &TelegramApiError) -> anyhow::Result<Duration> {
    if error.is_unauthorized() {
        anyhow::bail!("Telegram getUpdates rejected the bot token: {error}");
    }
    let secs = match error.code() {
        Some(409) => {
            tracing::warn!(
                "Telegram polling conflict: {error}. Ensure only one process is using this bot token."
            );
            TELEGRAM_POLL_CONFLICT_RETRY_SECS
        }
        Some(429) => {
            let retry_after_secs = error
                .retry_after_secs
                .unwrap_or(TELEGRAM_POLL_DEFAULT_RATE_LIMIT_RETRY_SECS)
                .clamp(1, TELEGRAM_POLL_MAX_RATE_LIMIT_RETRY_SECS);
            tracing::warn!(retry_after_secs, "Telegram getUpdates rate limited: {error}");
            retry_after_secs
        }
        _ => {
            tracing::warn!("Telegram poll error: {error}");
            TELEGRAM_POLL_RETRY_SECS
        }
    };
    Ok(Duration::from_secs(secs))
}

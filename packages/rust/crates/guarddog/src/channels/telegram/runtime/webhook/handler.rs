use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
};

use crate::channels::telegram::parse_telegram_update;
use crate::observability::GuardEvent;

use super::auth::validate_secret_token;
use super::state::TelegramWebhookState;

pub(super) async fn telegram_webhook_handler(
    State(state): State<TelegramWebhookState>,
    headers: HeaderMap,
    Json(update): Json<serde_json::Value>,
) -> Result<StatusCode, (StatusCode, String)> {
    let update_id = update.get("update_id").and_then(serde_json::Value::as_i64);
    tracing::debug!(
        update_id = ?update_id,
        "Webhook received Telegram update"
    );

    validate_secret_token(&headers, state.secret_token.as_deref())?;

    if let Some(update_id) = update_id
        && is_duplicate_update(&state, update_id).await
    {
        tracing::debug!(update_id, "Skipping duplicate update");
        return Ok(StatusCode::OK);
    }

    let Some(parsed) = parse_telegram_update(&update) else {
        tracing::debug!(
            event = GuardEvent::UpdateIgnored.as_str(),
            update_id = ?update_id,
            "Update not relevant for moderation; ignoring"
        );
        return Ok(StatusCode::OK);
    };

    if state.tx.send(parsed).await.is_err() {
        tracing::error!("Moderation inbound queue unavailable");
        if let Some(update_id) = update_id {
            release_update(&state, update_id).await;
        }
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            "moderation inbound queue unavailable".to_string(),
        ));
    }
    Ok(StatusCode::OK)
}

async fn is_duplicate_update(state: &TelegramWebhookState, update_id: i64) -> bool {
    match state.deduplicator.is_duplicate(update_id).await {
        Ok(is_duplicate) => is_duplicate,
        Err(error) => {
            // Fail open: a broken dedup store must not drop membership updates.
            tracing::warn!("Webhook dedup check failed for update_id={update_id}: {error}");
            false
        }
    }
}

async fn release_update(state: &TelegramWebhookState, update_id: i64) {
    if let Err(error) = state.deduplicator.release(update_id).await {
        tracing::warn!("Webhook dedup release failed for update_id={update_id}: {error}");
    }
}

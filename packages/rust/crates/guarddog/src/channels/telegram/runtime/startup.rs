use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;

use crate::channels::telegram::TelegramChannel;
use crate::channels::telegram::runtime_config::TelegramRuntimeConfig;
use crate::channels::traits::ModerationActions;
use crate::config::ModerationSettings;
use crate::policy::{AdmissionPolicy, RestrictTarget};
use crate::registry::ChatRegistry;
use crate::runtime::ModerationHandler;

/// Build the per-update handler for a Telegram bot.
///
/// A rejected token is fatal here, before any update is processed; other
/// `getMe` failures only lose the username used in the `/show_chats` report.
pub async fn build_moderation_handler(
    channel: Arc<TelegramChannel>,
    moderation: &ModerationSettings,
    runtime_config: &TelegramRuntimeConfig,
    registry: Arc<ChatRegistry>,
) -> Result<Arc<ModerationHandler>> {
    let policy = AdmissionPolicy::default()
        .with_restrict_target(RestrictTarget::from_setting(
            moderation.restrict_target_chat.as_deref(),
        ))
        .with_approve_join_requests(moderation.approve_join_requests.unwrap_or(false));

    let bot_username = match channel.fetch_bot_username().await {
        Ok(username) => Some(username),
        Err(error) if error.is_unauthorized() => {
            anyhow::bail!("Telegram rejected the bot token (getMe): {error}");
        }
        Err(error) => {
            tracing::warn!(error = %error, "Telegram getMe failed; using default bot username");
            None
        }
    };

    let actions: Arc<dyn ModerationActions> = channel;
    let mut handler = ModerationHandler::new(actions, policy, registry)
        .with_operator_chat(moderation.operator_chat_id.clone())
        .with_action_timeout(Duration::from_secs(runtime_config.action_timeout_secs));
    if let Some(username) = bot_username {
        handler = handler.with_bot_username(username);
    }
    Ok(Arc::new(handler))
}

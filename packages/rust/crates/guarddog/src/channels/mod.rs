//! Chat channels: platform transports behind the moderation actions trait.

pub(crate) mod telegram;
pub(crate) mod traits;

pub use telegram::{
    TELEGRAM_API_BASE_ENV, TELEGRAM_DEFAULT_API_BASE, TelegramApiError, TelegramChannel,
    TelegramRuntimeConfig, TelegramWebhookApp, UpdateDeduplicator, WebhookDedupConfig,
    WebhookEndpoint, build_moderation_handler, build_telegram_webhook_app, parse_guard_command,
    parse_telegram_update, run_telegram, run_telegram_webhook, telegram_display_name,
};
pub use traits::{ChatPermissions, ModerationActions};

//! Telegram channel integration.

mod channel;
mod commands;
mod idempotency;
mod runtime;
mod runtime_config;

pub use channel::{
    TELEGRAM_API_BASE_ENV, TELEGRAM_DEFAULT_API_BASE, TelegramApiError, TelegramChannel,
    parse_telegram_update, telegram_display_name,
};
pub use commands::parse_guard_command;
pub use idempotency::{UpdateDeduplicator, WebhookDedupConfig};
pub use runtime::{
    TelegramWebhookApp, WebhookEndpoint, build_moderation_handler, build_telegram_webhook_app,
    run_telegram, run_telegram_webhook,
};
pub use runtime_config::TelegramRuntimeConfig;

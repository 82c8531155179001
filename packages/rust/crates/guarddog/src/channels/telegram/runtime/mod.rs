//! Telegram runtime wiring (polling/webhook ingress + moderation dispatcher).

mod console;
mod run_polling;
mod run_webhook;
mod startup;
mod webhook;

pub use run_polling::run_telegram;
pub use run_webhook::{WebhookEndpoint, run_telegram_webhook};
pub use startup::build_moderation_handler;
pub use webhook::{TelegramWebhookApp, build_telegram_webhook_app};

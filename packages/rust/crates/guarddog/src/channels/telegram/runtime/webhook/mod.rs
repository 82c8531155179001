mod app;
mod auth;
mod handler;
mod path;
mod state;

pub use app::{TelegramWebhookApp, build_telegram_webhook_app};

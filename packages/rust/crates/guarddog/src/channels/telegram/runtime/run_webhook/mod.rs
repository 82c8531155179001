mod loop_control;
mod run;
mod secret;
mod server;

pub use run::{WebhookEndpoint, run_telegram_webhook};

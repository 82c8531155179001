use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "guarddog")]
#[command(about = "Telegram moderator: restricts premium accounts joining a chat.")]
pub(crate) struct Cli {
    /// Override config directory (`<dir>/guarddog/settings.yaml`).
    #[arg(long, global = true)]
    pub(crate) conf: Option<PathBuf>,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum TelegramRunMode {
    Polling,
    Webhook,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Moderate chats until Ctrl+C.
    Run {
        /// Bot token (default: TGBANBOT_TOKEN).
        #[arg(long)]
        bot_token: Option<String>,

        /// Update ingress (default: settings `telegram.mode`, else polling).
        #[arg(long, value_enum)]
        mode: Option<TelegramRunMode>,

        /// Webhook listen address (e.g. 0.0.0.0:8081).
        #[arg(long)]
        webhook_bind: Option<String>,

        /// Webhook route path (default: /telegram/webhook).
        #[arg(long)]
        webhook_path: Option<String>,

        /// Public URL registered with Telegram via setWebhook. Required in webhook mode.
        #[arg(long)]
        webhook_url: Option<String>,

        /// Secret expected in `X-Telegram-Bot-Api-Secret-Token`. Required in webhook mode.
        #[arg(long)]
        webhook_secret_token: Option<String>,

        /// Debug logging for guarddog.
        #[arg(long, short)]
        verbose: bool,
    },
}

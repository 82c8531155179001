//! guarddog CLI: moderate Telegram chats via long polling or webhook.
//!
//! Logging: `RUST_LOG` wins (e.g. `RUST_LOG=guarddog=debug`); otherwise
//! `guarddog=info`, or `guarddog=debug` with `run --verbose`.

mod cli;
mod nodes;
mod resolve;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use guarddog::{load_runtime_settings, set_config_home_override};

use crate::cli::{Cli, Command};
use crate::nodes::{RunCommandRequest, run_bot_command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(matches!(&cli.command, Command::Run { verbose: true, .. }));
    if let Some(conf_dir) = cli.conf {
        set_config_home_override(conf_dir);
    }
    let runtime_settings = load_runtime_settings();

    let Command::Run {
        bot_token,
        mode,
        webhook_bind,
        webhook_path,
        webhook_url,
        webhook_secret_token,
        verbose: _,
    } = cli.command;
    run_bot_command(
        RunCommandRequest {
            bot_token,
            mode,
            webhook_bind,
            webhook_path,
            webhook_url,
            webhook_secret_token,
        },
        &runtime_settings,
    )
    .await
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "guarddog=debug"
    } else {
        "guarddog=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;

use super::super::console::print_moderation_config;
use super::super::startup::build_moderation_handler;
use super::loop_control;
use crate::channels::telegram::TelegramChannel;
use crate::channels::telegram::runtime_config::TelegramRuntimeConfig;
use crate::config::RuntimeSettings;
use crate::registry::ChatRegistry;
use crate::runtime::{InboundUpdate, spawn_dispatcher};

/// Run the moderator via long polling until Ctrl+C.
pub async fn run_telegram(bot_token: String, settings: &RuntimeSettings) -> Result<()> {
    let runtime_config = TelegramRuntimeConfig::from_settings(&settings.telegram);
    let channel = Arc::new(TelegramChannel::new(bot_token));
    let handler = build_moderation_handler(
        Arc::clone(&channel),
        &settings.moderation,
        &runtime_config,
        Arc::new(ChatRegistry::new()),
    )
    .await?;

    if let Err(error) = channel.delete_webhook().await {
        tracing::warn!(
            error = %error,
            "Telegram deleteWebhook failed; a registered webhook makes getUpdates answer 409"
        );
    }

    let (tx, inbound_rx) = mpsc::channel::<InboundUpdate>(runtime_config.inbound_queue_capacity);
    let dispatcher = spawn_dispatcher(
        Arc::clone(&handler),
        inbound_rx,
        runtime_config.max_in_flight,
    );
    let listener_channel = Arc::clone(&channel);
    let mut listener = tokio::spawn(async move { listener_channel.listen(tx).await });

    println!("Telegram moderator listening... (polling, Ctrl+C to stop)");
    print_moderation_config(&runtime_config, &handler);

    let outcome = loop_control::wait_for_polling_shutdown(&mut listener).await;

    // The listener owned the only sender; the dispatcher now drains in-flight work.
    if let Err(error) = dispatcher.await {
        tracing::error!("moderation dispatcher join error: {error}");
    }
    outcome
}

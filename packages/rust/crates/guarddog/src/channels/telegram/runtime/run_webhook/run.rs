use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::sync::mpsc;

use super::super::console::print_moderation_config;
use super::super::startup::build_moderation_handler;
use super::super::webhook::build_telegram_webhook_app;
use super::loop_control;
use super::secret;
use super::server::WebhookServer;
use crate::channels::telegram::TelegramChannel;
use crate::channels::telegram::idempotency::WebhookDedupConfig;
use crate::channels::telegram::runtime_config::TelegramRuntimeConfig;
use crate::config::RuntimeSettings;
use crate::registry::ChatRegistry;
use crate::runtime::{InboundUpdate, spawn_dispatcher};

/// Where the webhook listens and how Telegram reaches it.
#[derive(Debug, Clone)]
pub struct WebhookEndpoint {
    pub bind_addr: String,
    pub path: String,
    /// Public URL passed to `setWebhook`; required.
    pub public_url: Option<String>,
    /// Required.
    pub secret_token: Option<String>,
}

/// Register the webhook, then moderate deliveries until Ctrl+C.
pub async fn run_telegram_webhook(
    bot_token: String,
    settings: &RuntimeSettings,
    endpoint: WebhookEndpoint,
) -> Result<()> {
    let WebhookEndpoint {
        bind_addr,
        path,
        public_url,
        secret_token,
    } = endpoint;
    let secret_token = secret::normalize_secret_token(secret_token)?;
    let public_url = secret::normalize_public_url(public_url)?;
    let runtime_config = TelegramRuntimeConfig::from_settings(&settings.telegram);
    let channel = Arc::new(TelegramChannel::new(bot_token));
    let handler = build_moderation_handler(
        Arc::clone(&channel),
        &settings.moderation,
        &runtime_config,
        Arc::new(ChatRegistry::new()),
    )
    .await?;

    let (tx, inbound_rx) = mpsc::channel::<InboundUpdate>(runtime_config.inbound_queue_capacity);
    let webhook = build_telegram_webhook_app(
        &path,
        Some(secret_token.clone()),
        WebhookDedupConfig::from_ttl_setting(settings.telegram.webhook_dedup_ttl_secs),
        tx,
    );
    let route = webhook.path;
    let dedup_config = webhook.dedup_config;

    let webhook_server = WebhookServer::bind(&bind_addr, webhook.app).await?;
    let dispatcher = spawn_dispatcher(
        Arc::clone(&handler),
        inbound_rx,
        runtime_config.max_in_flight,
    );

    // Registered after binding so Telegram's first delivery finds a listener.
    let registered = channel
        .set_webhook(&public_url, &secret_token)
        .await
        .with_context(|| format!("setWebhook failed for {public_url}"));
    if let Err(error) = registered {
        webhook_server.stop().await;
        if let Err(join_error) = dispatcher.await {
            tracing::error!("moderation dispatcher join error: {join_error}");
        }
        return Err(error);
    }
    tracing::info!(url = %public_url, "telegram webhook registered");

    println!("Telegram webhook listening on {bind_addr}{route} (Ctrl+C to stop)");
    println!("Webhook dedup ttl={}s", dedup_config.ttl_secs);
    print_moderation_config(&runtime_config, &handler);

    loop_control::wait_for_webhook_shutdown(&webhook_server).await;

    // Stopping the server drops the last queue sender; the dispatcher then drains.
    webhook_server.stop().await;
    if let Err(error) = dispatcher.await {
        tracing::error!("moderation dispatcher join error: {error}");
    }
    Ok(())
}

use std::time::Duration;

use super::server::WebhookServer;

const SERVER_CHECK_INTERVAL: Duration = Duration::from_secs(1);

/// Block until Ctrl+C, or until the server dies on its own (bind lost, I/O error).
pub(super) async fn wait_for_webhook_shutdown(server: &WebhookServer) {
    let mut server_check = tokio::time::interval(SERVER_CHECK_INTERVAL);
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                println!("Shutting down...");
                return;
            }
            _ = server_check.tick() => {
                if server.is_finished() {
                    tracing::warn!("Telegram webhook server exited unexpectedly");
                    return;
                }
            }
        }
    }
}

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// Running axum server; dropping the router on stop closes the moderation queue.
pub(super) struct WebhookServer {
    stop_tx: oneshot::Sender<()>,
    serve: JoinHandle<std::io::Result<()>>,
}

impl WebhookServer {
    pub(super) async fn bind(bind_addr: &str, app: Router) -> Result<Self> {
        let listener = TcpListener::bind(bind_addr)
            .await
            .with_context(|| format!("failed to bind telegram webhook on {bind_addr}"))?;
        let (stop_tx, stop_rx) = oneshot::channel::<()>();
        let serve = tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = stop_rx.await;
                })
                .await
        });
        Ok(Self { stop_tx, serve })
    }

    pub(super) fn is_finished(&self) -> bool {
        self.serve.is_finished()
    }

    /// Stop accepting requests and wait for open ones to finish.
    pub(super) async fn stop(self) {
        let _ = self.stop_tx.send(());
        match self.serve.await {
            Ok(Ok(())) => tracing::info!("Telegram webhook server stopped"),
            Ok(Err(error)) => tracing::error!("Telegram webhook server failed: {error}"),
            Err(error) => tracing::error!("Telegram webhook server task failed: {error}"),
        }
    }
}

use anyhow::Result;

/// Wait until Ctrl+C or until the polling listener stops on its own.
///
/// Returns the listener's error when it failed (e.g. a revoked token).
pub(super) async fn wait_for_polling_shutdown(
    listener: &mut tokio::task::JoinHandle<Result<()>>,
) -> Result<()> {
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            println!("Shutting down...");
            listener.abort();
            Ok(())
        }
        joined = &mut *listener => match joined {
            Ok(Ok(())) => {
                tracing::warn!("Telegram listener exited");
                Ok(())
            }
            Ok(Err(error)) => {
                tracing::error!("Telegram listener error: {error}");
                Err(error)
            }
            Err(error) => {
                tracing::error!("Telegram listener task join error: {error}");
                Ok(())
            }
        }
    }
}

use std::sync::Arc;

use tokio::sync::{Semaphore, mpsc};
use tokio::task::JoinSet;

use crate::observability::GuardEvent;

use super::handler::ModerationHandler;
use super::update::InboundUpdate;

/// Receive updates serially and handle each in its own task.
///
/// At most `max_in_flight` updates are handled concurrently. When the inbound
/// queue closes, the dispatcher stops accepting work and waits for every
/// in-flight task, so a started restriction always gets its notice.
pub fn spawn_dispatcher(
    handler: Arc<ModerationHandler>,
    mut rx: mpsc::Receiver<InboundUpdate>,
    max_in_flight: usize,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let semaphore = Arc::new(Semaphore::new(max_in_flight.max(1)));
        let mut workers = JoinSet::new();

        while let Some(update) = rx.recv().await {
            let permit = match Arc::clone(&semaphore).acquire_owned().await {
                Ok(permit) => permit,
                Err(_) => break,
            };
            let worker_handler = Arc::clone(&handler);
            workers.spawn(async move {
                let _permit = permit;
                worker_handler.handle_update(update).await;
            });

            while let Some(result) = workers.try_join_next() {
                if let Err(error) = result {
                    tracing::error!(
                        event = GuardEvent::WorkerCrashed.as_str(),
                        "moderation worker crashed: {error}"
                    );
                }
            }
        }

        tracing::info!(
            event = GuardEvent::DispatcherDraining.as_str(),
            in_flight = workers.len(),
            "inbound queue closed; draining in-flight updates"
        );
        while let Some(result) = workers.join_next().await {
            if let Err(error) = result {
                tracing::error!(
                    event = GuardEvent::WorkerCrashed.as_str(),
                    "moderation worker crashed: {error}"
                );
            }
        }
    })
}

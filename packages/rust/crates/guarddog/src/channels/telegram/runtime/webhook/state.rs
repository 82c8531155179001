use std::sync::Arc;

use tokio::sync::mpsc;

use crate::channels::telegram::idempotency::UpdateDeduplicator;
use crate::runtime::InboundUpdate;

#[derive(Clone)]
pub(super) struct TelegramWebhookState {
    pub(super) tx: mpsc::Sender<InboundUpdate>,
    pub(super) secret_token: Option<String>,
    pub(super) deduplicator: Arc<dyn UpdateDeduplicator>,
}

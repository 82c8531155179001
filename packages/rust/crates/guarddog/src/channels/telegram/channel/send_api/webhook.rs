use super::super::TelegramChannel;
use super::super::constants::TELEGRAM_ALLOWED_UPDATES;
use super::super::error::TelegramApiError;

impl TelegramChannel {
    /// Register `url` as the update endpoint.
    ///
    /// Telegram only delivers `chat_member` updates when they are listed in
    /// `allowed_updates`, so the list is always sent.
    pub async fn set_webhook(
        &self,
        url: &str,
        secret_token: &str,
    ) -> Result<(), TelegramApiError> {
        let body = serde_json::json!({
            "url": url,
            "secret_token": secret_token,
            "allowed_updates": TELEGRAM_ALLOWED_UPDATES,
        });
        self.call_api("setWebhook", &body).await.map(|_| ())
    }

    /// Drop any registered webhook; `getUpdates` answers 409 while one is set.
    pub async fn delete_webhook(&self) -> Result<(), TelegramApiError> {
        let body = serde_json::json!({ "drop_pending_updates": false });
        self.call_api("deleteWebhook", &body).await.map(|_| ())
    }
}

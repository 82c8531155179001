use super::super::TelegramChannel;
use super::super::envelope::ApiEnvelope;
use super::super::error::TelegramApiError;

impl TelegramChannel {
    /// Unwrap the Bot API envelope, returning its `result` payload.
    pub(in crate::channels::telegram::channel) async fn validate_telegram_response(
        response: reqwest::Response,
    ) -> Result<serde_json::Value, TelegramApiError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|error| TelegramApiError::transport(&error))?;

        match ApiEnvelope::parse(&body) {
            Some(envelope) if status.is_success() && envelope.ok => Ok(envelope.result),
            Some(envelope) => Err(TelegramApiError::rejected(status, Some(&envelope), &body)),
            None if status.is_success() => Err(TelegramApiError::malformed(format!(
                "unparseable Bot API response: {body}"
            ))),
            None => Err(TelegramApiError::rejected(status, None, &body)),
        }
    }
}

use std::time::Duration;

use super::constants::{TELEGRAM_HTTP_CONNECT_TIMEOUT_SECS, TELEGRAM_HTTP_REQUEST_TIMEOUT_SECS};

/// Shared HTTP client; the request timeout must outlive the long-poll window.
pub(super) fn build_telegram_http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(TELEGRAM_HTTP_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(TELEGRAM_HTTP_REQUEST_TIMEOUT_SECS))
        .build()
        .unwrap_or_else(|error| {
            tracing::warn!(
                error = %error,
                "Telegram HTTP client without timeouts: builder failed"
            );
            reqwest::Client::new()
        })
}

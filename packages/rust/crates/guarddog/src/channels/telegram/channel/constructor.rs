use super::client::build_telegram_http_client;
use super::constants::TELEGRAM_DEFAULT_API_BASE;
use super::{TELEGRAM_API_BASE_ENV, TelegramChannel};

impl TelegramChannel {
    fn default_api_base_url() -> String {
        std::env::var(TELEGRAM_API_BASE_ENV)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| TELEGRAM_DEFAULT_API_BASE.to_string())
    }

    /// Create a new Telegram channel against the default (or env-overridden) API base.
    pub fn new(bot_token: String) -> Self {
        Self::new_with_base_url(bot_token, Self::default_api_base_url())
    }

    /// Create a new Telegram channel against an explicit API base (mock servers in tests).
    pub fn new_with_base_url(bot_token: String, api_base_url: String) -> Self {
        Self {
            bot_token,
            api_base_url,
            client: build_telegram_http_client(),
        }
    }
}

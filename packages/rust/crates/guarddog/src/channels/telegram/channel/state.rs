pub const TELEGRAM_API_BASE_ENV: &str = "GUARDDOG_TELEGRAM_API_BASE_URL";

/// Telegram channel: long-polls the Bot API and performs moderation actions.
pub struct TelegramChannel {
    pub(super) bot_token: String,
    pub(super) api_base_url: String,
    pub(super) client: reqwest::Client,
}

impl TelegramChannel {
    pub(super) fn api_url(&self, method: &str) -> String {
        format!(
            "{}/bot{}/{method}",
            self.api_base_url.trim_end_matches('/'),
            self.bot_token
        )
    }
}

impl std::fmt::Debug for TelegramChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramChannel")
            .field("api_base_url", &self.api_base_url)
            .finish_non_exhaustive()
    }
}

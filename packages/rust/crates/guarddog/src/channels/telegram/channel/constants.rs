pub const TELEGRAM_DEFAULT_API_BASE: &str = "https://api.telegram.org";
pub(super) const TELEGRAM_POLL_TIMEOUT_SECS: u64 = 25;
pub(super) const TELEGRAM_POLL_RETRY_SECS: u64 = 5;
pub(super) const TELEGRAM_POLL_CONFLICT_RETRY_SECS: u64 = 2;
pub(super) const TELEGRAM_POLL_DEFAULT_RATE_LIMIT_RETRY_SECS: u64 = 1;
pub(super) const TELEGRAM_POLL_MAX_RATE_LIMIT_RETRY_SECS: u64 = 60;
pub(super) const TELEGRAM_HTTP_CONNECT_TIMEOUT_SECS: u64 = 10;
// Must outlive the long-poll timeout above.
pub(super) const TELEGRAM_HTTP_REQUEST_TIMEOUT_SECS: u64 = 35;
pub(super) const TELEGRAM_ALLOWED_UPDATES: [&str; 4] =
    ["chat_member", "my_chat_member", "message", "channel_post"];

//! Error types surfaced by the moderator.

use thiserror::Error;

/// Startup configuration failures. Fatal: the bot never starts processing.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Please provide a valid token in the {env_var} environment variable")]
    MissingToken { env_var: &'static str },

    #[error("telegram webhook requires a non-empty secret token for request authentication")]
    MissingWebhookSecret,

    #[error("telegram webhook requires a public URL (telegram.webhook_url) to register with setWebhook")]
    MissingWebhookUrl,

    #[error("invalid run mode `{0}` (expected `polling` or `webhook`)")]
    InvalidMode(String),
}

/// A rejected or unfinished outbound platform action.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    #[error("{action} rejected by platform: {detail}")]
    Rejected { action: &'static str, detail: String },

    #[error("{action} timed out after {timeout_ms}ms")]
    TimedOut { action: &'static str, timeout_ms: u64 },
}

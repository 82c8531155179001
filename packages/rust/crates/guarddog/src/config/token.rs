use crate::error::ConfigError;

/// Environment variable holding the Bot API token.
pub const BOT_TOKEN_ENV: &str = "TGBANBOT_TOKEN";

/// Resolve the bot token: explicit CLI value first, then `TGBANBOT_TOKEN`.
pub fn resolve_bot_token(cli_value: Option<String>) -> Result<String, ConfigError> {
    resolve_bot_token_with_lookup(cli_value, |name| std::env::var(name).ok())
}

#[doc(hidden)]
pub fn resolve_bot_token_with_lookup<F>(
    cli_value: Option<String>,
    lookup: F,
) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    cli_value
        .or_else(|| lookup(BOT_TOKEN_ENV))
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
        .ok_or(ConfigError::MissingToken {
            env_var: BOT_TOKEN_ENV,
        })
}

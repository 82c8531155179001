use guarddog::ConfigError;

use crate::cli::TelegramRunMode;

const TELEGRAM_MODE_ENV: &str = "GUARDDOG_TELEGRAM_MODE";

/// CLI value, then non-blank env, then settings, then default.
pub(crate) fn resolve_string(
    cli_value: Option<String>,
    env_name: &str,
    settings_value: Option<&str>,
    default: &str,
) -> String {
    resolve_optional_string(cli_value, env_name, settings_value)
        .unwrap_or_else(|| default.to_string())
}

pub(crate) fn resolve_optional_string(
    cli_value: Option<String>,
    env_name: &str,
    settings_value: Option<&str>,
) -> Option<String> {
    if cli_value.is_some() {
        return cli_value;
    }
    if let Ok(value) = std::env::var(env_name)
        && !value.trim().is_empty()
    {
        return Some(value);
    }
    settings_value.map(ToString::to_string)
}

/// Unlike runtime tuning values, an unrecognized mode is fatal.
pub(crate) fn resolve_run_mode(
    cli_mode: Option<TelegramRunMode>,
    settings_mode: Option<&str>,
) -> Result<TelegramRunMode, ConfigError> {
    if let Some(mode) = cli_mode {
        return Ok(mode);
    }
    let raw = std::env::var(TELEGRAM_MODE_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .or_else(|| settings_mode.map(ToString::to_string));
    match raw {
        None => Ok(TelegramRunMode::Polling),
        Some(raw) => parse_run_mode(&raw).ok_or(ConfigError::InvalidMode(raw)),
    }
}

fn parse_run_mode(raw: &str) -> Option<TelegramRunMode> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "polling" => Some(TelegramRunMode::Polling),
        "webhook" => Some(TelegramRunMode::Webhook),
        _ => None,
    }
}

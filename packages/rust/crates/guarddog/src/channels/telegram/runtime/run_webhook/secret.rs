use crate::error::ConfigError;

pub(super) fn normalize_secret_token(secret_token: Option<String>) -> Result<String, ConfigError> {
    non_blank(secret_token).ok_or(ConfigError::MissingWebhookSecret)
}

pub(super) fn normalize_public_url(public_url: Option<String>) -> Result<String, ConfigError> {
    non_blank(public_url).ok_or(ConfigError::MissingWebhookUrl)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

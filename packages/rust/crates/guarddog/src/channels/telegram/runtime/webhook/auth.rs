use axum::http::{HeaderMap, StatusCode};

const TELEGRAM_WEBHOOK_SECRET_HEADER: &str = "x-telegram-bot-api-secret-token";

/// Reject requests whose secret header does not match the configured token.
pub(super) fn validate_secret_token(
    headers: &HeaderMap,
    expected_secret: Option<&str>,
) -> Result<(), (StatusCode, String)> {
    let Some(expected) = expected_secret else {
        return Ok(());
    };
    let provided = headers
        .get(TELEGRAM_WEBHOOK_SECRET_HEADER)
        .and_then(|v| v.to_str().ok());
    match provided {
        Some(provided) if provided == expected => Ok(()),
        Some(_) => Err((
            StatusCode::UNAUTHORIZED,
            "invalid telegram webhook secret token".to_string(),
        )),
        None => Err((
            StatusCode::UNAUTHORIZED,
            "missing telegram webhook secret token".to_string(),
        )),
    }
}

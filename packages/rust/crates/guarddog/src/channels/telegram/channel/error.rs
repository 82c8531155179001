use reqwest::StatusCode;

use crate::error::ActionError;

use super::envelope::ApiEnvelope;

/// A failed Bot API call: transport error, HTTP error, or `ok=false` envelope.
#[derive(Debug)]
pub struct TelegramApiError {
    pub(super) status: Option<StatusCode>,
    pub(super) error_code: Option<i64>,
    pub(super) retry_after_secs: Option<u64>,
    pub(super) description: String,
}

impl TelegramApiError {
    pub(super) fn transport(err: &reqwest::Error) -> Self {
        let description = if err.is_timeout() {
            format!("request timed out: {err}")
        } else {
            format!("request failed: {err}")
        };
        Self::bare(description)
    }

    pub(super) fn malformed(detail: impl Into<String>) -> Self {
        Self::bare(detail.into())
    }

    /// Rejection reported by the platform, with or without a parseable envelope.
    pub(super) fn rejected(status: StatusCode, envelope: Option<&ApiEnvelope>, raw_body: &str) -> Self {
        Self {
            status: Some(status),
            error_code: envelope.and_then(|envelope| envelope.error_code),
            retry_after_secs: envelope.and_then(|envelope| envelope.parameters.retry_after),
            description: envelope
                .map_or(raw_body, |envelope| envelope.description_or(raw_body))
                .to_string(),
        }
    }

    fn bare(description: String) -> Self {
        Self {
            status: None,
            error_code: None,
            retry_after_secs: None,
            description,
        }
    }

    /// API error code, falling back to the HTTP status.
    pub(super) fn code(&self) -> Option<i64> {
        self.error_code
            .or_else(|| self.status.map(|status| i64::from(status.as_u16())))
    }

    /// Invalid or revoked token; retrying cannot succeed.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.code(), Some(401 | 403))
    }

    pub(super) fn into_action_error(self, action: &'static str) -> ActionError {
        ActionError::Rejected {
            action,
            detail: self.to_string(),
        }
    }
}

impl std::fmt::Display for TelegramApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(status) = self.status {
            write!(f, "status={status}, ")?;
        }
        if let Some(code) = self.error_code {
            write!(f, "error_code={code}, ")?;
        }
        if let Some(retry_after_secs) = self.retry_after_secs {
            write!(f, "retry_after={retry_after_secs}s, ")?;
        }
        f.write_str(&self.description)
    }
}

impl std::error::Error for TelegramApiError {}

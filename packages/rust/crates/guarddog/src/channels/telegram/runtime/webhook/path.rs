const DEFAULT_WEBHOOK_PATH: &str = "/telegram/webhook";

/// Leading slash enforced, trailing slashes dropped, blank → default path.
pub(super) fn normalize_webhook_path(path: &str) -> String {
    let trimmed = path.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_WEBHOOK_PATH.to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

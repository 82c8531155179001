use serde::Deserialize;

/// Response wrapper shared by every Bot API method.
#[derive(Debug, Deserialize)]
pub(super) struct ApiEnvelope {
    // Some proxies omit `ok` on success.
    #[serde(default = "ok_when_absent")]
    pub(super) ok: bool,
    #[serde(default)]
    pub(super) result: serde_json::Value,
    pub(super) error_code: Option<i64>,
    pub(super) description: Option<String>,
    #[serde(default)]
    pub(super) parameters: ResponseParameters,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct ResponseParameters {
    pub(super) retry_after: Option<u64>,
}

fn ok_when_absent() -> bool {
    true
}

impl ApiEnvelope {
    pub(super) fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }

    pub(super) fn description_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.description
            .as_deref()
            .filter(|description| !description.is_empty())
            .unwrap_or(fallback)
    }
}

//! Layered YAML settings.
//!
//! Two layers are read and merged field by field, user over system:
//! - system: `<PRJ_ROOT>/packages/conf/settings.yaml`
//! - user:   `<PRJ_CONFIG_HOME>/guarddog/settings.yaml`
//!
//! A missing file is an empty layer. An unreadable or invalid file is logged
//! and treated as empty, so a typo never keeps the moderator offline.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::Context;
use serde::Deserialize;

const SYSTEM_SETTINGS_FILE: &str = "packages/conf/settings.yaml";
const USER_SETTINGS_FILE: &str = "guarddog/settings.yaml";
const DEFAULT_CONFIG_HOME: &str = ".config";

static CONFIG_HOME_OVERRIDE: OnceLock<PathBuf> = OnceLock::new();

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RuntimeSettings {
    #[serde(default)]
    pub telegram: TelegramSettings,
    #[serde(default)]
    pub moderation: ModerationSettings,
}

/// Ingress and runtime tuning.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TelegramSettings {
    /// `polling` or `webhook`.
    pub mode: Option<String>,
    pub webhook_bind: Option<String>,
    pub webhook_path: Option<String>,
    /// Public HTTPS URL registered with `setWebhook`.
    pub webhook_url: Option<String>,
    pub webhook_secret_token: Option<String>,
    pub webhook_dedup_ttl_secs: Option<u64>,
    pub inbound_queue_capacity: Option<usize>,
    pub max_in_flight: Option<usize>,
    pub action_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModerationSettings {
    /// Fixed chat (`@name` or id) for restrictions; unset restricts in the joined chat.
    pub restrict_target_chat: Option<String>,
    pub approve_join_requests: Option<bool>,
    /// Chat that receives action-failure reports.
    pub operator_chat_id: Option<String>,
}

trait Overlay {
    /// Fields set in `top` win.
    fn overlay(self, top: Self) -> Self;
}

impl Overlay for RuntimeSettings {
    fn overlay(self, top: Self) -> Self {
        Self {
            telegram: self.telegram.overlay(top.telegram),
            moderation: self.moderation.overlay(top.moderation),
        }
    }
}

impl Overlay for TelegramSettings {
    fn overlay(self, top: Self) -> Self {
        Self {
            mode: top.mode.or(self.mode),
            webhook_bind: top.webhook_bind.or(self.webhook_bind),
            webhook_path: top.webhook_path.or(self.webhook_path),
            webhook_url: top.webhook_url.or(self.webhook_url),
            webhook_secret_token: top.webhook_secret_token.or(self.webhook_secret_token),
            webhook_dedup_ttl_secs: top.webhook_dedup_ttl_secs.or(self.webhook_dedup_ttl_secs),
            inbound_queue_capacity: top.inbound_queue_capacity.or(self.inbound_queue_capacity),
            max_in_flight: top.max_in_flight.or(self.max_in_flight),
            action_timeout_secs: top.action_timeout_secs.or(self.action_timeout_secs),
        }
    }
}

impl Overlay for ModerationSettings {
    fn overlay(self, top: Self) -> Self {
        Self {
            restrict_target_chat: top.restrict_target_chat.or(self.restrict_target_chat),
            approve_join_requests: top.approve_join_requests.or(self.approve_join_requests),
            operator_chat_id: top.operator_chat_id.or(self.operator_chat_id),
        }
    }
}

pub fn load_runtime_settings() -> RuntimeSettings {
    let (system_path, user_path) = runtime_settings_paths();
    load_runtime_settings_from_paths(&system_path, &user_path)
}

/// `(system, user)` settings file locations.
#[doc(hidden)]
pub fn runtime_settings_paths() -> (PathBuf, PathBuf) {
    let root = env_path("PRJ_ROOT")
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."));
    let config_home = CONFIG_HOME_OVERRIDE
        .get()
        .cloned()
        .or_else(|| env_path("PRJ_CONFIG_HOME"))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_HOME));
    (
        root.join(SYSTEM_SETTINGS_FILE),
        root.join(config_home).join(USER_SETTINGS_FILE),
    )
}

#[doc(hidden)]
pub fn load_runtime_settings_from_paths(system: &Path, user: &Path) -> RuntimeSettings {
    load_layer(system).overlay(load_layer(user))
}

/// Point the user layer at `<path>/guarddog/settings.yaml` (CLI `--conf`).
///
/// Relative paths resolve against `PRJ_ROOT`, else the working directory.
/// Only the first call takes effect.
pub fn set_config_home_override(path: impl Into<PathBuf>) {
    let path = path.into();
    if path.as_os_str().is_empty() {
        return;
    }
    if let Err(ignored) = CONFIG_HOME_OVERRIDE.set(path) {
        tracing::warn!(
            ignored = %ignored.display(),
            "config home override already set; ignoring"
        );
    }
}

fn load_layer(path: &Path) -> RuntimeSettings {
    match read_layer(path) {
        Ok(layer) => layer.unwrap_or_default(),
        Err(error) => {
            tracing::warn!(
                path = %path.display(),
                error = ?error,
                "ignoring settings file"
            );
            RuntimeSettings::default()
        }
    }
}

fn read_layer(path: &Path) -> anyhow::Result<Option<RuntimeSettings>> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = std::fs::read_to_string(path).context("failed to read settings file")?;
    let layer = serde_yaml::from_str(&raw).context("failed to parse settings yaml")?;
    Ok(Some(layer))
}

fn env_path(name: &str) -> Option<PathBuf> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

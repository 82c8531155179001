//! Telegram runtime configuration (queueing, concurrency, action timeout).

use crate::config::TelegramSettings;

const DEFAULT_INBOUND_QUEUE_CAPACITY: usize = 100;
const DEFAULT_MAX_IN_FLIGHT: usize = 16;
const DEFAULT_ACTION_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TelegramRuntimeConfig {
    pub inbound_queue_capacity: usize,
    pub max_in_flight: usize,
    pub action_timeout_secs: u64,
}

impl Default for TelegramRuntimeConfig {
    fn default() -> Self {
        Self {
            inbound_queue_capacity: DEFAULT_INBOUND_QUEUE_CAPACITY,
            max_in_flight: DEFAULT_MAX_IN_FLIGHT,
            action_timeout_secs: DEFAULT_ACTION_TIMEOUT_SECS,
        }
    }
}

impl TelegramRuntimeConfig {
    /// Environment overrides settings; settings override defaults.
    pub fn from_settings(settings: &TelegramSettings) -> Self {
        Self::from_lookup(|name| std::env::var(name).ok(), Some(settings))
    }

    #[doc(hidden)]
    pub fn from_lookup_for_test<F>(lookup: F, settings: Option<&TelegramSettings>) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_lookup(lookup, settings)
    }

    fn from_lookup<F>(lookup: F, settings: Option<&TelegramSettings>) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            inbound_queue_capacity: resolve_positive(
                &lookup,
                "GUARDDOG_INBOUND_QUEUE_CAPACITY",
                settings.and_then(|s| s.inbound_queue_capacity),
                defaults.inbound_queue_capacity,
            ),
            max_in_flight: resolve_positive(
                &lookup,
                "GUARDDOG_MAX_IN_FLIGHT",
                settings.and_then(|s| s.max_in_flight),
                defaults.max_in_flight,
            ),
            action_timeout_secs: resolve_positive(
                &lookup,
                "GUARDDOG_ACTION_TIMEOUT_SECS",
                settings.and_then(|s| s.action_timeout_secs),
                defaults.action_timeout_secs,
            ),
        }
    }
}

fn resolve_positive<F, T>(lookup: &F, name: &str, setting_value: Option<T>, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + PartialOrd + Default + Copy + std::fmt::Display,
{
    let zero = T::default();
    if let Some(raw) = lookup(name) {
        match raw.trim().parse::<T>() {
            Ok(value) if value > zero => return value,
            _ => tracing::warn!(
                env_var = %name,
                value = %raw,
                "invalid runtime config env value; using settings/default"
            ),
        }
    }
    match setting_value {
        Some(value) if value > zero => value,
        Some(value) => {
            tracing::warn!(
                setting = %name,
                value = %value,
                default = %default,
                "invalid runtime config settings value; using default"
            );
            default
        }
        None => default,
    }
}

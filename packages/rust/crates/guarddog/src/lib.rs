//! guarddog: a Telegram moderator that restricts premium accounts on join.
//!
//! - **membership**: status snapshots and the join/leave classifier.
//! - **policy**: admission rule and the decision for a joining member.
//! - **runtime**: per-update handler and the bounded dispatcher.
//! - **channels**: Telegram Bot API transport (polling + webhook).

#![allow(missing_docs)]

mod channels;
mod config;
mod error;
mod membership;
mod observability;
mod policy;
mod registry;
mod runtime;

pub use channels::{
    ChatPermissions, ModerationActions, TELEGRAM_API_BASE_ENV, TELEGRAM_DEFAULT_API_BASE,
    TelegramApiError, TelegramChannel, TelegramRuntimeConfig, TelegramWebhookApp,
    UpdateDeduplicator, WebhookDedupConfig, WebhookEndpoint, build_moderation_handler,
    build_telegram_webhook_app, parse_guard_command, parse_telegram_update, run_telegram,
    run_telegram_webhook, telegram_display_name,
};
pub use config::{
    BOT_TOKEN_ENV, ModerationSettings, RuntimeSettings, TelegramSettings, load_runtime_settings,
    load_runtime_settings_from_paths, resolve_bot_token, resolve_bot_token_with_lookup,
    runtime_settings_paths, set_config_home_override,
};
pub use error::{ActionError, ConfigError};
pub use membership::{
    ChatKind, ChatRef, MemberStatus, MembershipSnapshot, MembershipUpdateEvent, TransitionVerdict,
    UserRef, classify,
};
pub use policy::{
    AdmissionDecision, AdmissionPolicy, AdmissionRule, DecisionKind, PremiumRule, RestrictTarget,
};
pub use registry::{ChatRegistry, KnownChats, render_known_chats_report};
pub use runtime::{
    GuardCommand, InboundUpdate, ModerationHandler, ModerationOutcome, UpdateOutcome,
    spawn_dispatcher,
};

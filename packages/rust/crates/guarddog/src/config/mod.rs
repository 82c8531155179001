//! Config namespace: layered runtime settings and the bot token.

mod settings;
mod token;

pub use settings::{
    ModerationSettings, RuntimeSettings, TelegramSettings, load_runtime_settings,
    load_runtime_settings_from_paths, runtime_settings_paths, set_config_home_override,
};
pub use token::{BOT_TOKEN_ENV, resolve_bot_token, resolve_bot_token_with_lookup};

//! Telegram Bot API transport and update parsing.

mod client;
mod constants;
mod constructor;
mod envelope;
mod error;
mod listen;
mod parsing;
mod send_api;
mod state;
mod trait_impl;

pub use constants::TELEGRAM_DEFAULT_API_BASE;
pub use error::TelegramApiError;
pub use parsing::{parse_telegram_update, telegram_display_name};
pub use state::{TELEGRAM_API_BASE_ENV, TelegramChannel};

//! Parsing helpers for Telegram bot commands.

use crate::runtime::GuardCommand;

/// Parse a bot command from message text:
/// - `/show_chats`
/// - `/show_chats@<bot_username>` (group form)
///
/// Trailing arguments are ignored, matching Telegram's command entity rules.
pub fn parse_guard_command(text: &str) -> Option<GuardCommand> {
    let head = text.split_whitespace().next()?;
    let command = head.strip_prefix('/')?;
    let name = command.split_once('@').map_or(command, |(name, _bot)| name);
    if name.eq_ignore_ascii_case("show_chats") {
        Some(GuardCommand::ShowChats)
    } else {
        None
    }
}

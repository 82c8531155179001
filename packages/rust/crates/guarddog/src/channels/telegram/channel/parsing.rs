use crate::channels::telegram::commands::parse_guard_command;
use crate::membership::{
    ChatKind, ChatRef, MemberStatus, MembershipSnapshot, MembershipUpdateEvent, UserRef,
};
use crate::runtime::InboundUpdate;

/// Parse a Telegram update (returns None for unsupported or malformed updates).
///
/// - `chat_member` → membership event for the affected user
/// - `my_chat_member`, `channel_post`, plain `message` → chat observation
/// - `message` with `/show_chats` → command
pub fn parse_telegram_update(update: &serde_json::Value) -> Option<InboundUpdate> {
    if let Some(member_update) = update.get("chat_member") {
        return parse_chat_member_update(member_update).map(InboundUpdate::Membership);
    }
    if let Some(member_update) = update.get("my_chat_member") {
        return parse_chat(member_update.get("chat")?).map(InboundUpdate::ChatObserved);
    }
    if let Some(message) = update.get("message") {
        let chat = parse_chat(message.get("chat")?)?;
        let command = message
            .get("text")
            .and_then(serde_json::Value::as_str)
            .and_then(parse_guard_command);
        return Some(match command {
            Some(command) => InboundUpdate::Command { chat, command },
            None => InboundUpdate::ChatObserved(chat),
        });
    }
    if let Some(post) = update.get("channel_post") {
        return parse_chat(post.get("chat")?).map(InboundUpdate::ChatObserved);
    }
    None
}

fn parse_chat_member_update(member_update: &serde_json::Value) -> Option<MembershipUpdateEvent> {
    let chat = parse_chat(member_update.get("chat")?)?;
    let old_member = member_update.get("old_chat_member")?;
    let new_member = member_update.get("new_chat_member")?;
    let old = parse_snapshot(old_member)?;
    let new = parse_snapshot(new_member)?;
    let user = parse_user(new_member.get("user")?)?;
    Some(MembershipUpdateEvent {
        chat,
        user,
        old,
        new,
    })
}

fn parse_chat(chat: &serde_json::Value) -> Option<ChatRef> {
    let id = chat.get("id").and_then(serde_json::Value::as_i64)?;
    let kind = chat
        .get("type")
        .and_then(serde_json::Value::as_str)
        .and_then(ChatKind::from_telegram)
        // Private chats share the user's positive id; everything else is negative.
        .unwrap_or(if id > 0 {
            ChatKind::Private
        } else {
            ChatKind::Group
        });
    Some(ChatRef { id, kind })
}

fn parse_snapshot(member: &serde_json::Value) -> Option<MembershipSnapshot> {
    let raw_status = member.get("status").and_then(serde_json::Value::as_str)?;
    let Some(status) = MemberStatus::from_telegram(raw_status) else {
        tracing::debug!(status = raw_status, "unknown telegram member status");
        return None;
    };
    Some(MembershipSnapshot {
        status,
        is_member: member.get("is_member").and_then(serde_json::Value::as_bool),
    })
}

fn parse_user(user: &serde_json::Value) -> Option<UserRef> {
    let id = user.get("id").and_then(serde_json::Value::as_i64)?;
    let display_name = telegram_display_name(
        user.get("username").and_then(serde_json::Value::as_str),
        user.get("first_name")
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default(),
        user.get("last_name").and_then(serde_json::Value::as_str),
    );
    let is_premium = user
        .get("is_premium")
        .and_then(serde_json::Value::as_bool)
        .unwrap_or(false);
    Some(UserRef {
        id,
        display_name,
        is_premium,
    })
}

/// `@username` when set, otherwise `first_name [last_name]`.
pub fn telegram_display_name(
    username: Option<&str>,
    first_name: &str,
    last_name: Option<&str>,
) -> String {
    if let Some(username) = username.map(str::trim).filter(|name| !name.is_empty()) {
        return format!("@{username}");
    }
    match last_name.map(str::trim).filter(|name| !name.is_empty()) {
        Some(last_name) => format!("{first_name} {last_name}"),
        None => first_name.to_string(),
    }
}

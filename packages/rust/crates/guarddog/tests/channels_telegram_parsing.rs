#![allow(missing_docs)]

use guarddog::{
    ChatKind, ChatRef, GuardCommand, InboundUpdate, MemberStatus, MembershipSnapshot,
    parse_guard_command, parse_telegram_update, telegram_display_name,
};

fn chat_member_update(user: serde_json::Value, old: &str, new: &str) -> serde_json::Value {
    serde_json::json!({
        "update_id": 501,
        "chat_member": {
            "chat": {"id": -100_123, "type": "supergroup", "title": "Rustaceans"},
            "from": {"id": 1, "first_name": "Admin"},
            "date": 1_700_000_000,
            "old_chat_member": {"status": old, "user": user},
            "new_chat_member": {"status": new, "user": user}
        }
    })
}

#[test]
fn chat_member_update_becomes_membership_event() {
    let update = chat_member_update(
        serde_json::json!({"id": 77, "first_name": "Alice", "username": "alice", "is_premium": true}),
        "left",
        "member",
    );

    let Some(InboundUpdate::Membership(event)) = parse_telegram_update(&update) else {
        panic!("expected membership event");
    };
    assert_eq!(
        event.chat,
        ChatRef {
            id: -100_123,
            kind: ChatKind::Supergroup
        }
    );
    assert_eq!(event.user.id, 77);
    assert_eq!(event.user.display_name, "@alice");
    assert!(event.user.is_premium);
    assert_eq!(event.old, MembershipSnapshot::new(MemberStatus::NotMember));
    assert_eq!(event.new, MembershipSnapshot::new(MemberStatus::Member));
}

#[test]
fn missing_premium_flag_counts_as_regular() {
    let update = chat_member_update(
        serde_json::json!({"id": 78, "first_name": "Bob", "last_name": "Stone"}),
        "left",
        "member",
    );

    let Some(InboundUpdate::Membership(event)) = parse_telegram_update(&update) else {
        panic!("expected membership event");
    };
    assert!(!event.user.is_premium);
    assert_eq!(event.user.display_name, "Bob Stone");
}

#[test]
fn restricted_flag_is_carried() {
    let mut update = chat_member_update(serde_json::json!({"id": 79, "first_name": "Eve"}), "restricted", "restricted");
    update["chat_member"]["old_chat_member"]["is_member"] = serde_json::json!(false);
    update["chat_member"]["new_chat_member"]["is_member"] = serde_json::json!(true);

    let Some(InboundUpdate::Membership(event)) = parse_telegram_update(&update) else {
        panic!("expected membership event");
    };
    assert_eq!(event.old, MembershipSnapshot::restricted(false));
    assert_eq!(event.new, MembershipSnapshot::restricted(true));
}

#[test]
fn unknown_status_is_dropped() {
    let update = chat_member_update(serde_json::json!({"id": 80, "first_name": "Mallory"}), "left", "visitor");
    assert_eq!(parse_telegram_update(&update), None);
}

#[test]
fn malformed_updates_are_dropped() {
    assert_eq!(parse_telegram_update(&serde_json::json!({"update_id": 1})), None);
    assert_eq!(
        parse_telegram_update(&serde_json::json!({
            "update_id": 2,
            "chat_member": {"chat": {"id": -1}, "new_chat_member": {"status": "member"}}
        })),
        None
    );
}

#[test]
fn show_chats_message_becomes_command() {
    let update = serde_json::json!({
        "update_id": 9,
        "message": {
            "message_id": 3,
            "text": "/show_chats@guard_bot",
            "chat": {"id": 555, "type": "private"}
        }
    });
    assert_eq!(
        parse_telegram_update(&update),
        Some(InboundUpdate::Command {
            chat: ChatRef {
                id: 555,
                kind: ChatKind::Private
            },
            command: GuardCommand::ShowChats,
        })
    );
}

#[test]
fn other_updates_only_observe_the_chat() {
    let message = serde_json::json!({
        "update_id": 10,
        "message": {"message_id": 4, "text": "hello", "chat": {"id": -42, "type": "group"}}
    });
    assert_eq!(
        parse_telegram_update(&message),
        Some(InboundUpdate::ChatObserved(ChatRef {
            id: -42,
            kind: ChatKind::Group
        }))
    );

    let my_chat_member = serde_json::json!({
        "update_id": 11,
        "my_chat_member": {
            "chat": {"id": -100_9, "type": "channel"},
            "old_chat_member": {"status": "left", "user": {"id": 1, "first_name": "bot"}},
            "new_chat_member": {"status": "administrator", "user": {"id": 1, "first_name": "bot"}}
        }
    });
    assert_eq!(
        parse_telegram_update(&my_chat_member),
        Some(InboundUpdate::ChatObserved(ChatRef {
            id: -100_9,
            kind: ChatKind::Channel
        }))
    );
}

#[test]
fn chat_kind_falls_back_to_id_sign() {
    let update = serde_json::json!({
        "update_id": 12,
        "message": {"message_id": 5, "text": "hi", "chat": {"id": 31}}
    });
    assert_eq!(
        parse_telegram_update(&update),
        Some(InboundUpdate::ChatObserved(ChatRef {
            id: 31,
            kind: ChatKind::Private
        }))
    );
}

#[test]
fn display_name_rules() {
    assert_eq!(telegram_display_name(Some("alice"), "Alice", None), "@alice");
    assert_eq!(telegram_display_name(Some(" "), "Alice", Some("Doe")), "Alice Doe");
    assert_eq!(telegram_display_name(None, "Alice", None), "Alice");
}

#[test]
fn command_parsing() {
    assert_eq!(parse_guard_command("/show_chats"), Some(GuardCommand::ShowChats));
    assert_eq!(
        parse_guard_command("/SHOW_CHATS extra"),
        Some(GuardCommand::ShowChats)
    );
    assert_eq!(parse_guard_command("show_chats"), None);
    assert_eq!(parse_guard_command("/help"), None);
    assert_eq!(parse_guard_command(""), None);
}

#[test]
fn channel_post_observes_the_channel() {
    let post = serde_json::json!({
        "update_id": 12,
        "channel_post": {
            "message_id": 3,
            "chat": {"id": -100_44, "type": "channel", "title": "News"},
            "text": "hello"
        }
    });
    assert_eq!(
        parse_telegram_update(&post),
        Some(InboundUpdate::ChatObserved(ChatRef {
            id: -100_44,
            kind: ChatKind::Channel
        }))
    );
}

//! Chats the bot has observed, grouped by chat kind.

use std::collections::BTreeSet;
use std::sync::{Mutex, PoisonError};

use crate::membership::{ChatKind, ChatRef};

/// Append-only sets of chat IDs seen in any update.
#[derive(Debug, Default)]
pub struct ChatRegistry {
    user_ids: Mutex<BTreeSet<i64>>,
    group_ids: Mutex<BTreeSet<i64>>,
    channel_ids: Mutex<BTreeSet<i64>>,
}

/// Point-in-time copy of the registry contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnownChats {
    pub user_ids: Vec<i64>,
    pub group_ids: Vec<i64>,
    pub channel_ids: Vec<i64>,
}

impl ChatRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when the chat was not known before.
    pub fn record(&self, chat: &ChatRef) -> bool {
        let set = match chat.kind {
            ChatKind::Private => &self.user_ids,
            ChatKind::Group | ChatKind::Supergroup => &self.group_ids,
            ChatKind::Channel => &self.channel_ids,
        };
        set.lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(chat.id)
    }

    pub fn snapshot(&self) -> KnownChats {
        let copy = |set: &Mutex<BTreeSet<i64>>| {
            set.lock()
                .unwrap_or_else(PoisonError::into_inner)
                .iter()
                .copied()
                .collect::<Vec<_>>()
        };
        KnownChats {
            user_ids: copy(&self.user_ids),
            group_ids: copy(&self.group_ids),
            channel_ids: copy(&self.channel_ids),
        }
    }
}

pub fn render_known_chats_report(bot_username: &str, chats: &KnownChats) -> String {
    let join = |ids: &[i64]| {
        ids.iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!(
        "@{bot} is currently in a conversation with the user IDs {users}. \
Moreover it is a member of the groups with IDs {groups} \
and administrator in the channels with IDs {channels}.",
        bot = bot_username.trim_start_matches('@'),
        users = join(&chats.user_ids),
        groups = join(&chats.group_ids),
        channels = join(&chats.channel_ids),
    )
}

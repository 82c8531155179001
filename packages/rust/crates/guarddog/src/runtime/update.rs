use crate::membership::{ChatRef, MembershipUpdateEvent};

/// Bot commands understood by the moderator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardCommand {
    /// Report the chats the bot has observed.
    ShowChats,
}

/// A platform update reduced to what the moderator acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundUpdate {
    /// A member's standing changed in a chat the bot moderates.
    Membership(MembershipUpdateEvent),
    Command { chat: ChatRef, command: GuardCommand },
    /// Any other update; only feeds the chat registry.
    ChatObserved(ChatRef),
}

impl InboundUpdate {
    pub fn chat(&self) -> &ChatRef {
        match self {
            Self::Membership(event) => &event.chat,
            Self::Command { chat, .. } | Self::ChatObserved(chat) => chat,
        }
    }
}

//! Outbound moderation capabilities a chat platform must provide.

use async_trait::async_trait;

use crate::error::ActionError;

/// Member permissions applied by a restriction action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatPermissions {
    pub can_send_messages: bool,
}

impl ChatPermissions {
    pub const fn read_only() -> Self {
        Self {
            can_send_messages: false,
        }
    }
}

/// Core moderation trait. Implement it for any messaging platform.
///
/// Chat targets are strings so that both numeric ids and public `@username`
/// handles can be addressed.
#[async_trait]
pub trait ModerationActions: Send + Sync {
    /// Human-readable platform name.
    fn name(&self) -> &str;

    async fn restrict_member(
        &self,
        target_chat: &str,
        user_id: i64,
        permissions: ChatPermissions,
    ) -> Result<(), ActionError>;

    async fn send_message(&self, chat_id: &str, text: &str) -> Result<(), ActionError>;

    /// Approve a pending join request. Only used when the policy enables it.
    async fn approve_join_request(&self, chat_id: &str, user_id: i64) -> Result<(), ActionError>;
}

use async_trait::async_trait;

use crate::channels::traits::{ChatPermissions, ModerationActions};
use crate::error::ActionError;

use super::TelegramChannel;

#[async_trait]
impl ModerationActions for TelegramChannel {
    fn name(&self) -> &str {
        "telegram"
    }

    async fn restrict_member(
        &self,
        target_chat: &str,
        user_id: i64,
        permissions: ChatPermissions,
    ) -> Result<(), ActionError> {
        self.restrict_chat_member(target_chat, user_id, permissions.can_send_messages)
            .await
            .map_err(|error| error.into_action_error("restrictChatMember"))
    }

    async fn send_message(&self, chat_id: &str, text: &str) -> Result<(), ActionError> {
        self.send_message_text(chat_id, text)
            .await
            .map_err(|error| error.into_action_error("sendMessage"))
    }

    async fn approve_join_request(&self, chat_id: &str, user_id: i64) -> Result<(), ActionError> {
        self.approve_chat_join_request(chat_id, user_id)
            .await
            .map_err(|error| error.into_action_error("approveChatJoinRequest"))
    }
}

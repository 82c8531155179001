use super::super::TelegramChannel;
use super::super::error::TelegramApiError;

impl TelegramChannel {
    /// One Bot API call. Moderation actions are never retried automatically.
    pub(in crate::channels::telegram::channel) async fn call_api(
        &self,
        method: &str,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, TelegramApiError> {
        tracing::debug!(method, "telegram api request");
        let response = self
            .client
            .post(self.api_url(method))
            .json(body)
            .send()
            .await
            .map_err(|error| TelegramApiError::transport(&error))?;
        Self::validate_telegram_response(response).await
    }

    pub(in crate::channels::telegram::channel) async fn send_message_text(
        &self,
        chat_id: &str,
        text: &str,
    ) -> Result<(), TelegramApiError> {
        let body = serde_json::json!({
            "chat_id": chat_id,
            "text": text,
        });
        self.call_api("sendMessage", &body).await.map(|_| ())
    }

    pub(in crate::channels::telegram::channel) async fn restrict_chat_member(
        &self,
        chat_id: &str,
        user_id: i64,
        can_send_messages: bool,
    ) -> Result<(), TelegramApiError> {
        let body = serde_json::json!({
            "chat_id": chat_id,
            "user_id": user_id,
            "permissions": {
                "can_send_messages": can_send_messages,
            },
        });
        self.call_api("restrictChatMember", &body).await.map(|_| ())
    }

    pub(in crate::channels::telegram::channel) async fn approve_chat_join_request(
        &self,
        chat_id: &str,
        user_id: i64,
    ) -> Result<(), TelegramApiError> {
        let body = serde_json::json!({
            "chat_id": chat_id,
            "user_id": user_id,
        });
        self.call_api("approveChatJoinRequest", &body)
            .await
            .map(|_| ())
    }

    /// Bot username from `getMe` (without the leading `@`).
    pub async fn fetch_bot_username(&self) -> Result<String, TelegramApiError> {
        let result = self.call_api("getMe", &serde_json::json!({})).await?;
        let bot = serde_json::from_value::<BotUser>(result)
            .map_err(|error| TelegramApiError::malformed(format!("invalid getMe result: {error}")))?;
        bot.username
            .filter(|username| !username.is_empty())
            .ok_or_else(|| TelegramApiError::malformed(format!("bot {} has no username", bot.id)))
    }
}

#[derive(serde::Deserialize)]
struct BotUser {
    id: i64,
    username: Option<String>,
}

#![allow(dead_code)]

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use guarddog::{
    ActionError, ChatKind, ChatPermissions, ChatRef, MemberStatus, MembershipSnapshot,
    MembershipUpdateEvent, ModerationActions, UserRef,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCall {
    Restrict {
        target_chat: String,
        user_id: i64,
        permissions: ChatPermissions,
    },
    Send {
        chat_id: String,
        text: String,
    },
    Approve {
        chat_id: String,
        user_id: i64,
    },
}

/// Records every outbound call; individual actions can be made to fail or hang.
#[derive(Default)]
pub struct RecordingActions {
    pub calls: Mutex<Vec<RecordedCall>>,
    pub fail_restrict: bool,
    pub fail_send_to: Option<String>,
    pub fail_approve: bool,
    pub restrict_delay: Option<Duration>,
}

impl RecordingActions {
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("calls lock").clone()
    }

    fn record(&self, call: RecordedCall) {
        self.calls.lock().expect("calls lock").push(call);
    }
}

#[async_trait]
impl ModerationActions for RecordingActions {
    fn name(&self) -> &str {
        "recording"
    }

    async fn restrict_member(
        &self,
        target_chat: &str,
        user_id: i64,
        permissions: ChatPermissions,
    ) -> Result<(), ActionError> {
        if let Some(delay) = self.restrict_delay {
            tokio::time::sleep(delay).await;
        }
        self.record(RecordedCall::Restrict {
            target_chat: target_chat.to_string(),
            user_id,
            permissions,
        });
        if self.fail_restrict {
            return Err(ActionError::Rejected {
                action: "restrictChatMember",
                detail: "Bad Request: not enough rights".to_string(),
            });
        }
        Ok(())
    }

    async fn send_message(&self, chat_id: &str, text: &str) -> Result<(), ActionError> {
        self.record(RecordedCall::Send {
            chat_id: chat_id.to_string(),
            text: text.to_string(),
        });
        if self.fail_send_to.as_deref() == Some(chat_id) {
            return Err(ActionError::Rejected {
                action: "sendMessage",
                detail: "Forbidden: bot was kicked".to_string(),
            });
        }
        Ok(())
    }

    async fn approve_join_request(&self, chat_id: &str, user_id: i64) -> Result<(), ActionError> {
        self.record(RecordedCall::Approve {
            chat_id: chat_id.to_string(),
            user_id,
        });
        if self.fail_approve {
            return Err(ActionError::Rejected {
                action: "approveChatJoinRequest",
                detail: "Bad Request: HIDE_REQUESTER_MISSING".to_string(),
            });
        }
        Ok(())
    }
}

pub const GROUP_ID: i64 = -100_777;

pub fn membership_event(
    display_name: &str,
    is_premium: bool,
    old: MembershipSnapshot,
    new: MembershipSnapshot,
) -> MembershipUpdateEvent {
    MembershipUpdateEvent {
        chat: ChatRef {
            id: GROUP_ID,
            kind: ChatKind::Supergroup,
        },
        user: UserRef {
            id: 4242,
            display_name: display_name.to_string(),
            is_premium,
        },
        old,
        new,
    }
}

pub fn join_event(display_name: &str, is_premium: bool) -> MembershipUpdateEvent {
    membership_event(
        display_name,
        is_premium,
        MembershipSnapshot::new(MemberStatus::NotMember),
        MembershipSnapshot::new(MemberStatus::Member),
    )
}

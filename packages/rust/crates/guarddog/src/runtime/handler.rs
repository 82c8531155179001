use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::channels::{ChatPermissions, ModerationActions};
use crate::error::ActionError;
use crate::membership::{MembershipUpdateEvent, TransitionVerdict, classify};
use crate::observability::GuardEvent;
use crate::policy::{AdmissionDecision, AdmissionPolicy, DecisionKind};
use crate::registry::{ChatRegistry, render_known_chats_report};

use super::update::{GuardCommand, InboundUpdate};

const DEFAULT_ACTION_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_BOT_USERNAME: &str = "guarddog_bot";

/// Result of handling one membership event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModerationOutcome {
    pub verdict: TransitionVerdict,
    /// Present if and only if `verdict` is a join.
    pub decision: Option<AdmissionDecision>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    Moderated(ModerationOutcome),
    ChatsReported,
    Observed,
}

/// Applies the admission policy to single updates.
///
/// Action failures never leave this type. Each action runs under a timeout
/// without retry; failures go to the operator chat when one is configured.
pub struct ModerationHandler {
    actions: Arc<dyn ModerationActions>,
    policy: AdmissionPolicy,
    registry: Arc<ChatRegistry>,
    bot_username: String,
    operator_chat_id: Option<String>,
    action_timeout: Duration,
}

impl ModerationHandler {
    pub fn new(
        actions: Arc<dyn ModerationActions>,
        policy: AdmissionPolicy,
        registry: Arc<ChatRegistry>,
    ) -> Self {
        Self {
            actions,
            policy,
            registry,
            bot_username: DEFAULT_BOT_USERNAME.to_string(),
            operator_chat_id: None,
            action_timeout: DEFAULT_ACTION_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_bot_username(mut self, username: impl Into<String>) -> Self {
        self.bot_username = username.into();
        self
    }

    #[must_use]
    pub fn with_operator_chat(mut self, chat_id: Option<String>) -> Self {
        self.operator_chat_id = chat_id
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());
        self
    }

    #[must_use]
    pub fn with_action_timeout(mut self, timeout: Duration) -> Self {
        self.action_timeout = timeout.max(Duration::from_millis(1));
        self
    }

    pub fn registry(&self) -> &Arc<ChatRegistry> {
        &self.registry
    }

    pub fn policy(&self) -> &AdmissionPolicy {
        &self.policy
    }

    pub async fn handle_update(&self, update: InboundUpdate) -> UpdateOutcome {
        let chat = *update.chat();
        if self.registry.record(&chat) {
            tracing::debug!(
                event = GuardEvent::ChatRecorded.as_str(),
                chat_id = chat.id,
                chat_kind = ?chat.kind,
                "new chat observed"
            );
        }

        match update {
            InboundUpdate::Membership(event) => {
                UpdateOutcome::Moderated(self.handle_membership(&event).await)
            }
            InboundUpdate::Command {
                chat,
                command: GuardCommand::ShowChats,
            } => {
                let report =
                    render_known_chats_report(&self.bot_username, &self.registry.snapshot());
                let chat_id = chat.id.to_string();
                match self
                    .run_action("sendMessage", self.actions.send_message(&chat_id, &report))
                    .await
                {
                    Ok(()) => tracing::info!(
                        event = GuardEvent::ChatsReported.as_str(),
                        chat_id = %chat_id,
                        "known chats reported"
                    ),
                    Err(error) => tracing::warn!(
                        event = GuardEvent::NotificationFailed.as_str(),
                        platform = self.actions.name(),
                        chat_id = %chat_id,
                        error = %error,
                        "failed to send known chats report"
                    ),
                }
                UpdateOutcome::ChatsReported
            }
            InboundUpdate::ChatObserved(_) => UpdateOutcome::Observed,
        }
    }

    /// Classify the transition and, on a join, decide and act.
    pub async fn handle_membership(&self, event: &MembershipUpdateEvent) -> ModerationOutcome {
        let verdict = classify(event.old, event.new);
        tracing::debug!(
            event = GuardEvent::TransitionClassified.as_str(),
            chat_id = event.chat.id,
            user_id = event.user.id,
            old_status = event.old.status.as_telegram_str(),
            new_status = event.new.status.as_telegram_str(),
            verdict = verdict.as_str(),
            "membership transition classified"
        );

        let Some(decision) = self.policy.evaluate(verdict, event) else {
            return ModerationOutcome {
                verdict,
                decision: None,
            };
        };

        tracing::info!(
            event = GuardEvent::DecisionMade.as_str(),
            chat_id = event.chat.id,
            user_id = event.user.id,
            member_name = %event.user.display_name,
            user_is_premium = event.user.is_premium,
            rule = self.policy.rule_name(),
            decision = decision.kind.as_str(),
            "admission decision made"
        );
        self.apply_decision(event, &decision).await;

        ModerationOutcome {
            verdict,
            decision: Some(decision),
        }
    }

    async fn apply_decision(&self, event: &MembershipUpdateEvent, decision: &AdmissionDecision) {
        let chat_id = event.chat_id();
        match decision.kind {
            DecisionKind::Restrict => {
                let target = self.policy.restrict_target().resolve(event);
                let result = self
                    .run_action(
                        "restrictChatMember",
                        self.actions.restrict_member(
                            &target,
                            decision.user_id,
                            ChatPermissions::read_only(),
                        ),
                    )
                    .await;
                match result {
                    Ok(()) => tracing::info!(
                        event = GuardEvent::RestrictionApplied.as_str(),
                        target_chat = %target,
                        user_id = decision.user_id,
                        "member restricted"
                    ),
                    Err(error) => {
                        // The notice is still sent; the chat may read "not approved"
                        // for a restriction that did not take effect.
                        tracing::warn!(
                            event = GuardEvent::RestrictionFailed.as_str(),
                            platform = self.actions.name(),
                            target_chat = %target,
                            user_id = decision.user_id,
                            error = %error,
                            "failed to restrict member"
                        );
                        self.report_to_operator(format!(
                            "Restriction failed for {} ({}) in {target}: {error}",
                            event.user.display_name, decision.user_id
                        ))
                        .await;
                    }
                }
            }
            DecisionKind::Admit if self.policy.approve_join_requests() => {
                let result = self
                    .run_action(
                        "approveChatJoinRequest",
                        self.actions
                            .approve_join_request(&chat_id, decision.user_id),
                    )
                    .await;
                match result {
                    Ok(()) => tracing::info!(
                        event = GuardEvent::JoinRequestApproved.as_str(),
                        chat_id = %chat_id,
                        user_id = decision.user_id,
                        "join request approved"
                    ),
                    Err(error) => {
                        tracing::warn!(
                            event = GuardEvent::JoinRequestApproveFailed.as_str(),
                            platform = self.actions.name(),
                            chat_id = %chat_id,
                            user_id = decision.user_id,
                            error = %error,
                            "failed to approve join request"
                        );
                        self.report_to_operator(format!(
                            "Join request approval failed for {} ({}) in {chat_id}: {error}",
                            event.user.display_name, decision.user_id
                        ))
                        .await;
                    }
                }
            }
            DecisionKind::Admit => {}
        }

        match self
            .run_action(
                "sendMessage",
                self.actions.send_message(&chat_id, &decision.message),
            )
            .await
        {
            Ok(()) => tracing::debug!(
                event = GuardEvent::NotificationSent.as_str(),
                chat_id = %chat_id,
                "admission notice sent"
            ),
            Err(error) => {
                tracing::error!(
                    event = GuardEvent::NotificationFailed.as_str(),
                    platform = self.actions.name(),
                    chat_id = %chat_id,
                    user_id = decision.user_id,
                    decision = decision.kind.as_str(),
                    error = %error,
                    "admission notice lost"
                );
                self.report_to_operator(format!(
                    "Admission notice lost for chat {chat_id}: \"{}\" ({error})",
                    decision.message
                ))
                .await;
            }
        }
    }

    async fn report_to_operator(&self, text: String) {
        let Some(operator_chat_id) = self.operator_chat_id.as_deref() else {
            return;
        };
        let text = format!("[{}] {text}", self.actions.name());
        if let Err(error) = self
            .run_action(
                "sendMessage",
                self.actions.send_message(operator_chat_id, &text),
            )
            .await
        {
            tracing::error!(
                event = GuardEvent::OperatorReportFailed.as_str(),
                platform = self.actions.name(),
                operator_chat_id,
                error = %error,
                report = %text,
                "failed to report to operator chat"
            );
        }
    }

    async fn run_action<F>(&self, action: &'static str, call: F) -> Result<(), ActionError>
    where
        F: Future<Output = Result<(), ActionError>>,
    {
        match tokio::time::timeout(self.action_timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(ActionError::TimedOut {
                action,
                timeout_ms: u64::try_from(self.action_timeout.as_millis()).unwrap_or(u64::MAX),
            }),
        }
    }
}

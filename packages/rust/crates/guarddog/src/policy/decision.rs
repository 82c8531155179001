use std::sync::Arc;

use crate::membership::{MembershipUpdateEvent, TransitionVerdict};

use super::rule::{AdmissionRule, PremiumRule};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionKind {
    Restrict,
    Admit,
}

impl DecisionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Restrict => "restrict",
            Self::Admit => "admit",
        }
    }
}

/// Verdict for one joining member plus the notice sent to the chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdmissionDecision {
    pub kind: DecisionKind,
    pub user_id: i64,
    pub chat_id: i64,
    pub message: String,
}

/// Chat the restriction action is applied to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RestrictTarget {
    /// The chat the member joined.
    #[default]
    EventChat,
    /// A fixed chat id or `@username`, regardless of where the join happened.
    Fixed(String),
}

impl RestrictTarget {
    /// Blank values keep the default target.
    pub fn from_setting(value: Option<&str>) -> Self {
        match value.map(str::trim).filter(|value| !value.is_empty()) {
            Some(chat) => Self::Fixed(chat.to_string()),
            None => Self::EventChat,
        }
    }

    pub fn resolve(&self, event: &MembershipUpdateEvent) -> String {
        match self {
            Self::EventChat => event.chat_id(),
            Self::Fixed(chat) => chat.clone(),
        }
    }
}

#[derive(Clone)]
pub struct AdmissionPolicy {
    rule: Arc<dyn AdmissionRule>,
    restrict_target: RestrictTarget,
    approve_join_requests: bool,
}

impl Default for AdmissionPolicy {
    fn default() -> Self {
        Self::new(Arc::new(PremiumRule))
    }
}

impl std::fmt::Debug for AdmissionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdmissionPolicy")
            .field("rule", &self.rule.name())
            .field("restrict_target", &self.restrict_target)
            .field("approve_join_requests", &self.approve_join_requests)
            .finish()
    }
}

impl AdmissionPolicy {
    pub fn new(rule: Arc<dyn AdmissionRule>) -> Self {
        Self {
            rule,
            restrict_target: RestrictTarget::EventChat,
            approve_join_requests: false,
        }
    }

    #[must_use]
    pub fn with_restrict_target(mut self, target: RestrictTarget) -> Self {
        self.restrict_target = target;
        self
    }

    #[must_use]
    pub fn with_approve_join_requests(mut self, enabled: bool) -> Self {
        self.approve_join_requests = enabled;
        self
    }

    pub fn rule_name(&self) -> &'static str {
        self.rule.name()
    }

    pub fn restrict_target(&self) -> &RestrictTarget {
        &self.restrict_target
    }

    pub fn approve_join_requests(&self) -> bool {
        self.approve_join_requests
    }

    /// Decide for a member that just joined.
    ///
    /// Callers must only pass events classified as [`TransitionVerdict::Join`];
    /// [`AdmissionPolicy::evaluate`] enforces that.
    pub fn decide(&self, event: &MembershipUpdateEvent) -> AdmissionDecision {
        let name = &event.user.display_name;
        let (kind, message) = if self.rule.should_restrict(event) {
            (
                DecisionKind::Restrict,
                format!("Premium user not approved, {name}"),
            )
        } else {
            (DecisionKind::Admit, format!("User approved, {name}"))
        };
        AdmissionDecision {
            kind,
            user_id: event.user.id,
            chat_id: event.chat.id,
            message,
        }
    }

    /// Produces a decision if and only if the verdict is a join.
    pub fn evaluate(
        &self,
        verdict: TransitionVerdict,
        event: &MembershipUpdateEvent,
    ) -> Option<AdmissionDecision> {
        match verdict {
            TransitionVerdict::Join => Some(self.decide(event)),
            TransitionVerdict::Leave | TransitionVerdict::Steady | TransitionVerdict::Unknown => {
                None
            }
        }
    }
}

#![allow(missing_docs)]

use std::sync::Arc;

use guarddog::{
    AdmissionPolicy, AdmissionRule, ChatKind, ChatRef, DecisionKind, MemberStatus,
    MembershipSnapshot, MembershipUpdateEvent, RestrictTarget, TransitionVerdict, UserRef,
};

fn join_event(display_name: &str, is_premium: bool) -> MembershipUpdateEvent {
    MembershipUpdateEvent {
        chat: ChatRef {
            id: -100_500,
            kind: ChatKind::Supergroup,
        },
        user: UserRef {
            id: 42,
            display_name: display_name.to_string(),
            is_premium,
        },
        old: MembershipSnapshot::new(MemberStatus::NotMember),
        new: MembershipSnapshot::new(MemberStatus::Member),
    }
}

#[test]
fn premium_member_is_restricted() {
    let decision = AdmissionPolicy::default().decide(&join_event("@alice", true));
    assert_eq!(decision.kind, DecisionKind::Restrict);
    assert_eq!(decision.user_id, 42);
    assert_eq!(decision.chat_id, -100_500);
    assert_eq!(decision.message, "Premium user not approved, @alice");
}

#[test]
fn regular_member_is_admitted() {
    let decision = AdmissionPolicy::default().decide(&join_event("Bob Smith", false));
    assert_eq!(decision.kind, DecisionKind::Admit);
    assert_eq!(decision.message, "User approved, Bob Smith");
}

#[test]
fn only_joins_produce_decisions() {
    let policy = AdmissionPolicy::default();
    let event = join_event("@alice", true);
    assert!(policy.evaluate(TransitionVerdict::Join, &event).is_some());
    for verdict in [
        TransitionVerdict::Leave,
        TransitionVerdict::Steady,
        TransitionVerdict::Unknown,
    ] {
        assert!(policy.evaluate(verdict, &event).is_none(), "{verdict:?}");
    }
}

struct RestrictEveryone;

impl AdmissionRule for RestrictEveryone {
    fn name(&self) -> &'static str {
        "everyone"
    }

    fn should_restrict(&self, _event: &MembershipUpdateEvent) -> bool {
        true
    }
}

#[test]
fn custom_rule_drives_the_decision() {
    let policy = AdmissionPolicy::new(Arc::new(RestrictEveryone));
    assert_eq!(policy.rule_name(), "everyone");
    let decision = policy.decide(&join_event("Bob", false));
    assert_eq!(decision.kind, DecisionKind::Restrict);
    assert_eq!(decision.message, "Premium user not approved, Bob");
}

#[test]
fn restrict_target_defaults_to_event_chat() {
    let policy = AdmissionPolicy::default();
    assert_eq!(policy.restrict_target(), &RestrictTarget::EventChat);
    assert!(!policy.approve_join_requests());
    assert_eq!(
        policy.restrict_target().resolve(&join_event("Bob", false)),
        "-100500"
    );
}

#[test]
fn restrict_target_setting_parsing() {
    assert_eq!(RestrictTarget::from_setting(None), RestrictTarget::EventChat);
    assert_eq!(
        RestrictTarget::from_setting(Some("   ")),
        RestrictTarget::EventChat
    );
    let fixed = RestrictTarget::from_setting(Some(" @moderated_chat "));
    assert_eq!(fixed, RestrictTarget::Fixed("@moderated_chat".to_string()));
    assert_eq!(fixed.resolve(&join_event("Bob", false)), "@moderated_chat");
}

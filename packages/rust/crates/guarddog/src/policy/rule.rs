use crate::membership::MembershipUpdateEvent;

/// Criterion deciding whether a joining member gets restricted.
pub trait AdmissionRule: Send + Sync {
    /// Short label for logs.
    fn name(&self) -> &'static str;

    fn should_restrict(&self, event: &MembershipUpdateEvent) -> bool;
}

/// Restricts accounts carrying the premium flag.
#[derive(Debug, Clone, Copy, Default)]
pub struct PremiumRule;

impl AdmissionRule for PremiumRule {
    fn name(&self) -> &'static str {
        "premium"
    }

    fn should_restrict(&self, event: &MembershipUpdateEvent) -> bool {
        event.user.is_premium
    }
}

//! Admission policy: what to do with a member who just joined.

mod decision;
mod rule;

pub use decision::{AdmissionDecision, AdmissionPolicy, DecisionKind, RestrictTarget};
pub use rule::{AdmissionRule, PremiumRule};

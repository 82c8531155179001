//! Membership snapshots, update events, and the transition classifier.

mod classify;
mod types;

pub use classify::{TransitionVerdict, classify};
pub use types::{ChatKind, ChatRef, MemberStatus, MembershipSnapshot, MembershipUpdateEvent, UserRef};

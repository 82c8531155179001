use super::types::{MemberStatus, MembershipSnapshot};

/// Outcome of comparing two consecutive snapshots of the same party.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionVerdict {
    /// Nothing relevant changed.
    Unknown,
    Join,
    Leave,
    /// Status changed without crossing the membership boundary.
    Steady,
}

impl TransitionVerdict {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Join => "join",
            Self::Leave => "leave",
            Self::Steady => "steady",
        }
    }
}

/// Reduce an old/new snapshot pair to a membership transition.
///
/// Equal statuses short-circuit to [`TransitionVerdict::Unknown`] before the
/// boundary comparison. The one exception is a restricted member whose
/// `is_member` flag flipped, which crosses the boundary without a status change.
pub fn classify(old: MembershipSnapshot, new: MembershipSnapshot) -> TransitionVerdict {
    let was_member = old.is_member();
    let is_member = new.is_member();

    if old.status == new.status {
        let restricted_flag_flip = old.status == MemberStatus::Restricted && was_member != is_member;
        if !restricted_flag_flip {
            return TransitionVerdict::Unknown;
        }
    }

    match (was_member, is_member) {
        (false, true) => TransitionVerdict::Join,
        (true, false) => TransitionVerdict::Leave,
        _ => TransitionVerdict::Steady,
    }
}

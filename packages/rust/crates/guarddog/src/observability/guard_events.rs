/// Stable ids for structured log events (`event = ...` field).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardEvent {
    UpdateIgnored,
    TransitionClassified,
    DecisionMade,
    RestrictionApplied,
    RestrictionFailed,
    JoinRequestApproved,
    JoinRequestApproveFailed,
    NotificationSent,
    NotificationFailed,
    OperatorReportFailed,
    ChatRecorded,
    ChatsReported,
    DispatcherDraining,
    WorkerCrashed,
    DedupDuplicateDetected,
    DedupUpdateAccepted,
}

impl GuardEvent {
    pub const ALL: [Self; 16] = [
        Self::UpdateIgnored,
        Self::TransitionClassified,
        Self::DecisionMade,
        Self::RestrictionApplied,
        Self::RestrictionFailed,
        Self::JoinRequestApproved,
        Self::JoinRequestApproveFailed,
        Self::NotificationSent,
        Self::NotificationFailed,
        Self::OperatorReportFailed,
        Self::ChatRecorded,
        Self::ChatsReported,
        Self::DispatcherDraining,
        Self::WorkerCrashed,
        Self::DedupDuplicateDetected,
        Self::DedupUpdateAccepted,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UpdateIgnored => "guarddog.update.ignored",
            Self::TransitionClassified => "guarddog.membership.classified",
            Self::DecisionMade => "guarddog.admission.decided",
            Self::RestrictionApplied => "guarddog.action.restrict.applied",
            Self::RestrictionFailed => "guarddog.action.restrict.failed",
            Self::JoinRequestApproved => "guarddog.action.approve.applied",
            Self::JoinRequestApproveFailed => "guarddog.action.approve.failed",
            Self::NotificationSent => "guarddog.action.notify.sent",
            Self::NotificationFailed => "guarddog.action.notify.failed",
            Self::OperatorReportFailed => "guarddog.operator.report_failed",
            Self::ChatRecorded => "guarddog.registry.chat_recorded",
            Self::ChatsReported => "guarddog.registry.reported",
            Self::DispatcherDraining => "guarddog.dispatch.draining",
            Self::WorkerCrashed => "guarddog.dispatch.worker_crashed",
            Self::DedupDuplicateDetected => "guarddog.webhook.dedup.duplicate",
            Self::DedupUpdateAccepted => "guarddog.webhook.dedup.accepted",
        }
    }
}

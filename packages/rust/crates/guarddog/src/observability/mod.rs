mod guard_events;

pub(crate) use guard_events::GuardEvent;

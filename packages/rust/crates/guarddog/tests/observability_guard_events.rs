#![allow(missing_docs)]

use std::collections::HashSet;

#[path = "../src/observability/guard_events.rs"]
mod guard_events;

use guard_events::GuardEvent;

#[test]
fn guard_event_ids_are_namespaced_and_unique() {
    let mut seen = HashSet::new();
    for event in GuardEvent::ALL {
        let id = event.as_str();
        assert!(id.starts_with("guarddog."), "{id}");
        assert!(seen.insert(id), "duplicate event id {id}");
    }
    assert_eq!(seen.len(), GuardEvent::ALL.len());
}

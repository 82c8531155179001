#![allow(missing_docs)]

mod support;

use std::sync::Arc;
use std::time::Duration;

use guarddog::{
    AdmissionPolicy, ChatRegistry, InboundUpdate, ModerationHandler, spawn_dispatcher,
};
use tokio::sync::mpsc;

use support::{RecordedCall, RecordingActions, join_event};

#[tokio::test]
async fn closing_the_queue_drains_in_flight_updates() -> anyhow::Result<()> {
    let actions = Arc::new(RecordingActions {
        restrict_delay: Some(Duration::from_millis(100)),
        ..RecordingActions::default()
    });
    let handler = Arc::new(ModerationHandler::new(
        Arc::clone(&actions) as Arc<dyn guarddog::ModerationActions>,
        AdmissionPolicy::default(),
        Arc::new(ChatRegistry::new()),
    ));
    let (tx, rx) = mpsc::channel(8);
    let dispatcher = spawn_dispatcher(handler, rx, 2);

    for name in ["Alice", "Erin", "Frank"] {
        tx.send(InboundUpdate::Membership(join_event(name, true)))
            .await?;
    }
    drop(tx);

    tokio::time::timeout(Duration::from_secs(5), dispatcher).await??;

    let calls = actions.calls();
    let restrictions = calls
        .iter()
        .filter(|call| matches!(call, RecordedCall::Restrict { .. }))
        .count();
    let notices = calls
        .iter()
        .filter(|call| matches!(call, RecordedCall::Send { .. }))
        .count();
    assert_eq!(restrictions, 3);
    assert_eq!(notices, 3);
    Ok(())
}

#[tokio::test]
async fn dispatcher_exits_when_queue_closes_empty() -> anyhow::Result<()> {
    let handler = Arc::new(ModerationHandler::new(
        Arc::new(RecordingActions::default()),
        AdmissionPolicy::default(),
        Arc::new(ChatRegistry::new()),
    ));
    let (tx, rx) = mpsc::channel::<InboundUpdate>(1);
    let dispatcher = spawn_dispatcher(handler, rx, 0);
    drop(tx);

    tokio::time::timeout(Duration::from_secs(1), dispatcher).await??;
    Ok(())
}

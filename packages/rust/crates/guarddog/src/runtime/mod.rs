//! Platform-independent moderation runtime: per-update handling and dispatch.

mod dispatch;
mod handler;
mod update;

pub use dispatch::spawn_dispatcher;
pub use handler::{ModerationHandler, ModerationOutcome, UpdateOutcome};
pub use update::{GuardCommand, InboundUpdate};

use crate::channels::telegram::runtime_config::TelegramRuntimeConfig;
use crate::runtime::ModerationHandler;

pub(super) fn print_moderation_config(
    runtime_config: &TelegramRuntimeConfig,
    handler: &ModerationHandler,
) {
    println!(
        "Runtime config: inbound_queue={} in_flight={} action_timeout={}s",
        runtime_config.inbound_queue_capacity,
        runtime_config.max_in_flight,
        runtime_config.action_timeout_secs
    );
    let policy = handler.policy();
    println!(
        "Admission policy: rule={} restrict_target={:?} approve_join_requests={}",
        policy.rule_name(),
        policy.restrict_target(),
        policy.approve_join_requests()
    );
    println!("Commands: /show_chats");
}

mod run;

pub(crate) use run::{RunCommandRequest, run_bot_command};

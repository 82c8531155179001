mod loop_control;
mod run;

pub use run::run_telegram;

use guarddog::{
    RuntimeSettings, WebhookEndpoint, resolve_bot_token, run_telegram, run_telegram_webhook,
};

use crate::cli::TelegramRunMode;
use crate::resolve::{resolve_optional_string, resolve_run_mode, resolve_string};

const DEFAULT_WEBHOOK_BIND: &str = "0.0.0.0:8081";
const DEFAULT_WEBHOOK_PATH: &str = "/telegram/webhook";

pub(crate) struct RunCommandRequest {
    pub(crate) bot_token: Option<String>,
    pub(crate) mode: Option<TelegramRunMode>,
    pub(crate) webhook_bind: Option<String>,
    pub(crate) webhook_path: Option<String>,
    pub(crate) webhook_url: Option<String>,
    pub(crate) webhook_secret_token: Option<String>,
}

pub(crate) async fn run_bot_command(
    req: RunCommandRequest,
    runtime_settings: &RuntimeSettings,
) -> anyhow::Result<()> {
    let RunCommandRequest {
        bot_token,
        mode,
        webhook_bind,
        webhook_path,
        webhook_url,
        webhook_secret_token,
    } = req;

    let bot_token = resolve_bot_token(bot_token)?;
    let telegram = &runtime_settings.telegram;
    match resolve_run_mode(mode, telegram.mode.as_deref())? {
        TelegramRunMode::Polling => run_telegram(bot_token, runtime_settings).await,
        TelegramRunMode::Webhook => {
            let bind = resolve_string(
                webhook_bind,
                "GUARDDOG_TELEGRAM_WEBHOOK_BIND",
                telegram.webhook_bind.as_deref(),
                DEFAULT_WEBHOOK_BIND,
            );
            let path = resolve_string(
                webhook_path,
                "GUARDDOG_TELEGRAM_WEBHOOK_PATH",
                telegram.webhook_path.as_deref(),
                DEFAULT_WEBHOOK_PATH,
            );
            let url = resolve_optional_string(
                webhook_url,
                "GUARDDOG_TELEGRAM_WEBHOOK_URL",
                telegram.webhook_url.as_deref(),
            );
            let secret_token = resolve_optional_string(
                webhook_secret_token,
                "GUARDDOG_TELEGRAM_WEBHOOK_SECRET_TOKEN",
                telegram.webhook_secret_token.as_deref(),
            );
            run_telegram_webhook(
                bot_token,
                runtime_settings,
                WebhookEndpoint {
                    bind_addr: bind,
                    path,
                    public_url: url,
                    secret_token,
                },
            )
            .await
        }
    }
}

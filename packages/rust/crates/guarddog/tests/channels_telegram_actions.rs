#![allow(missing_docs)]

use std::sync::Arc;

use anyhow::Result;
use axum::{Json, Router, extract::Path, extract::State, http::StatusCode, routing::post};
use guarddog::{ActionError, ChatPermissions, ModerationActions, TelegramChannel};
use tokio::sync::Mutex;

#[derive(Clone, Default)]
struct ActionMockState {
    requests: Arc<Mutex<Vec<(String, serde_json::Value)>>>,
    reject_restrict: bool,
    unauthorized_get_me: bool,
}

async fn handle_method(
    State(state): State<ActionMockState>,
    Path(method): Path<String>,
    Json(body): Json<serde_json::Value>,
) -> (StatusCode, Json<serde_json::Value>) {
    state.requests.lock().await.push((method.clone(), body));
    match method.as_str() {
        "restrictChatMember" if state.reject_restrict => (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({
                "ok": false,
                "error_code": 400,
                "description": "Bad Request: not enough rights to restrict/unrestrict chat member"
            })),
        ),
        "getMe" if state.unauthorized_get_me => (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({
                "ok": false,
                "error_code": 401,
                "description": "Unauthorized"
            })),
        ),
        "getMe" => (
            StatusCode::OK,
            Json(serde_json::json!({
                "ok": true,
                "result": {"id": 1, "is_bot": true, "first_name": "Guard", "username": "guard_bot"}
            })),
        ),
        _ => (StatusCode::OK, Json(serde_json::json!({"ok": true, "result": true}))),
    }
}

async fn spawn_action_mock_telegram_api(
    state: ActionMockState,
) -> Result<Option<(String, tokio::task::JoinHandle<()>)>> {
    let app = Router::new()
        .route("/botfake-token/{method}", post(handle_method))
        .with_state(state);
    let listener = match tokio::net::TcpListener::bind("127.0.0.1:0").await {
        Ok(listener) => listener,
        Err(err) if err.kind() == std::io::ErrorKind::PermissionDenied => {
            eprintln!("skipping telegram action tests: local socket bind is not permitted");
            return Ok(None);
        }
        Err(err) => return Err(err.into()),
    };
    let addr = listener.local_addr()?;
    let handle = tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok(Some((format!("http://{addr}"), handle)))
}

#[tokio::test]
async fn restrict_and_send_hit_the_bot_api() -> Result<()> {
    let state = ActionMockState::default();
    let Some((api_base, handle)) = spawn_action_mock_telegram_api(state.clone()).await? else {
        return Ok(());
    };
    let channel = TelegramChannel::new_with_base_url("fake-token".to_string(), api_base);

    channel
        .restrict_member("@moderated", 42, ChatPermissions::read_only())
        .await?;
    channel
        .send_message("-100500", "Premium user not approved, @alice")
        .await?;
    channel.approve_join_request("-100500", 42).await?;

    let requests = state.requests.lock().await.clone();
    assert_eq!(
        requests,
        vec![
            (
                "restrictChatMember".to_string(),
                serde_json::json!({
                    "chat_id": "@moderated",
                    "user_id": 42,
                    "permissions": {"can_send_messages": false}
                })
            ),
            (
                "sendMessage".to_string(),
                serde_json::json!({
                    "chat_id": "-100500",
                    "text": "Premium user not approved, @alice"
                })
            ),
            (
                "approveChatJoinRequest".to_string(),
                serde_json::json!({"chat_id": "-100500", "user_id": 42})
            ),
        ]
    );

    handle.abort();
    Ok(())
}

#[tokio::test]
async fn rejected_restriction_maps_to_action_error() -> Result<()> {
    let state = ActionMockState {
        reject_restrict: true,
        ..ActionMockState::default()
    };
    let Some((api_base, handle)) = spawn_action_mock_telegram_api(state).await? else {
        return Ok(());
    };
    let channel = TelegramChannel::new_with_base_url("fake-token".to_string(), api_base);

    let error = channel
        .restrict_member("-100500", 42, ChatPermissions::read_only())
        .await
        .expect_err("restriction should be rejected");
    let (action, detail) = match error {
        ActionError::Rejected { action, detail } => (action, detail),
        other @ ActionError::TimedOut { .. } => panic!("expected rejection, got {other:?}"),
    };
    assert_eq!(action, "restrictChatMember");
    assert!(detail.contains("error_code=400"), "{detail}");
    assert!(detail.contains("not enough rights"), "{detail}");

    handle.abort();
    Ok(())
}

#[tokio::test]
async fn get_me_returns_username() -> Result<()> {
    let Some((api_base, handle)) =
        spawn_action_mock_telegram_api(ActionMockState::default()).await?
    else {
        return Ok(());
    };
    let channel = TelegramChannel::new_with_base_url("fake-token".to_string(), api_base);

    assert_eq!(channel.fetch_bot_username().await?, "guard_bot");

    handle.abort();
    Ok(())
}

#[tokio::test]
async fn unauthorized_get_me_is_detected() -> Result<()> {
    let state = ActionMockState {
        unauthorized_get_me: true,
        ..ActionMockState::default()
    };
    let Some((api_base, handle)) = spawn_action_mock_telegram_api(state).await? else {
        return Ok(());
    };
    let channel = TelegramChannel::new_with_base_url("fake-token".to_string(), api_base);

    let error = channel
        .fetch_bot_username()
        .await
        .expect_err("getMe should be rejected");
    assert!(error.is_unauthorized());

    handle.abort();
    Ok(())
}

#[tokio::test]
async fn moderation_handler_rejects_revoked_token_at_startup() -> Result<()> {
    let state = ActionMockState {
        unauthorized_get_me: true,
        ..ActionMockState::default()
    };
    let Some((api_base, handle)) = spawn_action_mock_telegram_api(state).await? else {
        return Ok(());
    };
    let channel = Arc::new(TelegramChannel::new_with_base_url(
        "fake-token".to_string(),
        api_base,
    ));

    let result = guarddog::build_moderation_handler(
        channel,
        &guarddog::ModerationSettings::default(),
        &guarddog::TelegramRuntimeConfig::default(),
        Arc::new(guarddog::ChatRegistry::new()),
    )
    .await;
    assert!(result.is_err());

    handle.abort();
    Ok(())
}

#[tokio::test]
async fn webhook_registration_requests_membership_updates() -> Result<()> {
    let state = ActionMockState::default();
    let Some((api_base, handle)) = spawn_action_mock_telegram_api(state.clone()).await? else {
        return Ok(());
    };
    let channel = TelegramChannel::new_with_base_url("fake-token".to_string(), api_base);

    channel
        .set_webhook("https://guard.example.org/telegram/webhook", "s3cret")
        .await?;
    channel.delete_webhook().await?;

    let requests = state.requests.lock().await.clone();
    assert_eq!(
        requests,
        vec![
            (
                "setWebhook".to_string(),
                serde_json::json!({
                    "url": "https://guard.example.org/telegram/webhook",
                    "secret_token": "s3cret",
                    "allowed_updates": ["chat_member", "my_chat_member", "message", "channel_post"]
                })
            ),
            (
                "deleteWebhook".to_string(),
                serde_json::json!({"drop_pending_updates": false})
            ),
        ]
    );

    handle.abort();
    Ok(())
}

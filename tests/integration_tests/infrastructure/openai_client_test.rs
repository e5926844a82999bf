use std::sync::{Arc, Mutex};

use axum::Router;
use axum::Json;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use serde_json::{Value, json};
use tokio::sync::oneshot;

use callsight::application::ports::{LlmClient, LlmClientError};
use callsight::infrastructure::llm::OpenAiClient;

use crate::mock_server;

type Captured = Arc<Mutex<Option<(Option<String>, Value)>>>;

async fn start_mock_openai(status: u16, response: Value) -> (String, oneshot::Sender<()>, Captured) {
    let captured: Captured = Arc::new(Mutex::new(None));
    let recorder = Arc::clone(&captured);

    let app = Router::new().route(
        "/v1/chat/completions",
        post(move |headers: HeaderMap, Json(body): Json<Value>| async move {
            let auth = headers
                .get("authorization")
                .and_then(|v| v.to_str().ok())
                .map(String::from);
            *recorder.lock().unwrap() = Some((auth, body));
            let status = StatusCode::from_u16(status).unwrap();
            (status, Json(response)).into_response()
        }),
    );

    let (base_url, shutdown_tx) = mock_server::start(app).await;
    (format!("{}/v1", base_url), shutdown_tx, captured)
}

#[tokio::test]
async fn given_choice_when_completing_then_message_content_is_returned() {
    let (base_url, shutdown_tx, captured) = start_mock_openai(
        200,
        json!({ "choices": [{ "index": 0, "message": { "role": "assistant", "content": "Summary text" } }] }),
    )
    .await;

    let text = OpenAiClient::new(
        "sk-test".to_string(),
        Some("gpt-4o-mini".to_string()),
        Some(base_url),
    )
    .complete("Summarize")
    .await
    .unwrap();

    assert_eq!(text, "Summary text");
    let (auth, body) = captured.lock().unwrap().clone().unwrap();
    assert_eq!(auth.as_deref(), Some("Bearer sk-test"));
    assert_eq!(body["model"], json!("gpt-4o-mini"));
    assert_eq!(body["messages"][0]["role"], json!("user"));
    assert_eq!(body["messages"][0]["content"], json!("Summarize"));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_empty_choices_when_completing_then_invalid_response() {
    let (base_url, shutdown_tx, _) = start_mock_openai(200, json!({ "choices": [] })).await;

    let result = OpenAiClient::new("sk-test".to_string(), None, Some(base_url))
        .complete("prompt")
        .await;

    assert!(matches!(result, Err(LlmClientError::InvalidResponse(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_rate_limit_when_completing_then_rate_limited() {
    let (base_url, shutdown_tx, _) = start_mock_openai(429, json!({})).await;

    let result = OpenAiClient::new("sk-test".to_string(), None, Some(base_url))
        .complete("prompt")
        .await;

    assert!(matches!(result, Err(LlmClientError::RateLimited)));
    shutdown_tx.send(()).ok();
}

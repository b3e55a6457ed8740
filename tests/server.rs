mod mocks;

use mocks::{model::MockModel, transcripts::MockTranscripts};
use recap::server::{router, AppState, SUMMARIZE_ERROR};
use recap::summarizer::Summarizer;
use serde_json::{json, Value};
use std::sync::Arc;

/// Serve the router on an ephemeral port and return its base URL.
async fn spawn_app(transcripts: MockTranscripts, model: MockModel) -> String {
    let summarizer = Summarizer::new(Arc::new(transcripts), Arc::new(model));
    let app = router(Arc::new(AppState::new(summarizer)));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

async fn post_chat(base: &str, body: Value) -> reqwest::Response {
    reqwest::Client::new()
        .post(format!("{}/api/chat", base))
        .json(&body)
        .send()
        .await
        .unwrap()
}

/// Parse an event-stream body into (event, data) pairs.
fn parse_events(body: &str) -> Vec<(String, String)> {
    body.split("\n\n")
        .filter(|frame| !frame.trim().is_empty())
        .map(|frame| {
            let mut event = String::new();
            let mut data = Vec::new();
            for line in frame.lines() {
                if let Some(name) = line.strip_prefix("event:") {
                    event = name.trim().to_string();
                } else if let Some(value) = line.strip_prefix("data:") {
                    data.push(value.strip_prefix(' ').unwrap_or(value).to_string());
                }
            }
            (event, data.join("\n"))
        })
        .filter(|(event, _)| !event.is_empty())
        .collect()
}

async fn assert_generic_error(response: reqwest::Response) {
    assert_eq!(response.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "error": SUMMARIZE_ERROR }));
}

// ─── Happy path ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_end_to_end_stream() {
    let transcripts = MockTranscripts::new(&["first words", "second words"]);
    let model = MockModel::new(&["# Video Summary: Demo\n", "## Introduction\n## Main Topics\n", "- one"]);
    let transcript_calls = transcripts.calls.clone();
    let model_calls = model.calls.clone();

    let base = spawn_app(transcripts, model).await;
    let response = post_chat(
        &base,
        json!({ "messages": [{ "role": "user", "content": "https://youtube.com/watch?v=abc123" }] }),
    )
    .await;

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/event-stream"), "got {}", content_type);

    let body = response.text().await.unwrap();
    assert!(!body.is_empty());
    let events = parse_events(&body);
    let names: Vec<&str> = events.iter().map(|(e, _)| e.as_str()).collect();
    assert_eq!(names, vec!["video", "summary", "summary", "summary", "done"]);

    let video: Value = serde_json::from_str(&events[0].1).unwrap();
    assert_eq!(video["video_id"], "abc123");
    assert_eq!(video["embed_url"], "https://www.youtube.com/embed/abc123");

    let first: Value = serde_json::from_str(&events[1].1).unwrap();
    assert_eq!(first["delta"], "# Video Summary: Demo\n");

    let last: Value = serde_json::from_str(&events[3].1).unwrap();
    assert_eq!(last["delta"], "- one");
    assert_eq!(
        last["html"],
        "<h1>Video Summary: Demo</h1>\n<h2>Introduction</h2>\n<hr>\n<h2>Main Topics</h2>\n<li>one</li>"
    );

    assert_eq!(*transcript_calls.lock().unwrap(), vec!["abc123".to_string()]);
    let model_calls = model_calls.lock().unwrap();
    assert_eq!(model_calls.len(), 1);
    assert!(model_calls[0]
        .last()
        .unwrap()
        .content
        .contains("first words second words"));
}

#[tokio::test]
async fn test_extra_message_fields_are_accepted() {
    let base = spawn_app(MockTranscripts::new(&["t"]), MockModel::new(&["ok"])).await;
    let response = post_chat(
        &base,
        json!({ "messages": [{
            "id": "msg-1",
            "role": "user",
            "content": "https://www.youtube.com/watch?v=xyz",
            "createdAt": "2024-08-01T00:00:00Z"
        }] }),
    )
    .await;
    assert_eq!(response.status(), reqwest::StatusCode::OK);
}

// ─── Failures collapse to one response ───────────────────────────────────────

#[tokio::test]
async fn test_missing_video_id_returns_generic_error() {
    let model = MockModel::new(&["x"]);
    let model_calls = model.calls.clone();
    let base = spawn_app(MockTranscripts::new(&["t"]), model).await;

    let response = post_chat(
        &base,
        json!({ "messages": [{ "role": "user", "content": "https://youtube.com/watch?list=PL1" }] }),
    )
    .await;

    assert_generic_error(response).await;
    assert!(model_calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_empty_messages_return_generic_error() {
    let transcripts = MockTranscripts::new(&["t"]);
    let transcript_calls = transcripts.calls.clone();
    let base = spawn_app(transcripts, MockModel::new(&["x"])).await;

    assert_generic_error(post_chat(&base, json!({ "messages": [] })).await).await;
    assert!(transcript_calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_malformed_body_returns_generic_error() {
    let base = spawn_app(MockTranscripts::new(&["t"]), MockModel::new(&["x"])).await;

    assert_generic_error(post_chat(&base, json!({ "msgs": [] })).await).await;
    assert_generic_error(
        post_chat(&base, json!({ "messages": [{ "role": "robot", "content": "x" }] })).await,
    )
    .await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/chat", base))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_generic_error(response).await;
}

#[tokio::test]
async fn test_upstream_failures_return_generic_error() {
    let base = spawn_app(MockTranscripts::failing("no captions"), MockModel::new(&["x"])).await;
    let body = json!({ "messages": [{ "role": "user", "content": "https://youtube.com/watch?v=abc123" }] });
    assert_generic_error(post_chat(&base, body.clone()).await).await;

    let base = spawn_app(MockTranscripts::new(&["t"]), MockModel::failing("bad key")).await;
    assert_generic_error(post_chat(&base, body).await).await;
}

#[tokio::test]
async fn test_mid_stream_failure_emits_error_event() {
    let model = MockModel::with_chunks(vec![Ok("# Title".to_string()), Err("reset".to_string())]);
    let base = spawn_app(MockTranscripts::new(&["t"]), model).await;

    let response = post_chat(
        &base,
        json!({ "messages": [{ "role": "user", "content": "https://youtube.com/watch?v=abc123" }] }),
    )
    .await;
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let events = parse_events(&response.text().await.unwrap());
    let names: Vec<&str> = events.iter().map(|(e, _)| e.as_str()).collect();
    assert_eq!(names, vec!["video", "summary", "error"]);

    let error: Value = serde_json::from_str(&events[2].1).unwrap();
    assert_eq!(error["error"], SUMMARIZE_ERROR);
}

// ─── Static routes ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_index_and_health() {
    let base = spawn_app(MockTranscripts::new(&["t"]), MockModel::new(&["x"])).await;

    let page = reqwest::get(format!("{}/", base)).await.unwrap();
    assert_eq!(page.status(), reqwest::StatusCode::OK);
    let html = page.text().await.unwrap();
    assert!(html.contains("YouTube Video Summarizer"));
    assert!(html.contains("/api/chat"));

    // A new URL drops the previous video until the server sends the next one.
    let reset = html.find("lastSubmittedUrl = url;").unwrap();
    let clear = html[reset..].find("clearVideo();").unwrap();
    assert!(clear < html[reset..].find("fetch(").unwrap());
    assert!(html.contains("videoCard.hidden = true"));

    let health: Value = reqwest::get(format!("{}/health", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health, json!({ "status": "ok" }));
}

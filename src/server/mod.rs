//! HTTP server: the browser page and the streaming summarize endpoint.

use crate::message::ChatMessage;
use crate::render::render_html;
use crate::summarizer::{Summarizer, Summary, TextStream};
use crate::video::embed_url;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{
        sse::{Event, KeepAlive, Sse},
        Html, IntoResponse, Response,
    },
    routing::{get, post},
    Json, Router,
};
use futures::stream::{self, Stream, StreamExt};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Message returned for every failed summarization.
pub const SUMMARIZE_ERROR: &str = "Failed to summarize video";

const INDEX_HTML: &str = include_str!("index.html");

/// Shared application state.
pub struct AppState {
    summarizer: Summarizer,
}

impl AppState {
    pub fn new(summarizer: Summarizer) -> Self {
        Self { summarizer }
    }
}

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/api/chat", post(chat))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

// === Request/Response Types ===

#[derive(Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Serialize)]
struct VideoEvent {
    video_id: String,
    embed_url: String,
}

#[derive(Serialize)]
struct SummaryEvent<'a> {
    delta: &'a str,
    html: String,
}

// === Handlers ===

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn chat(
    State(state): State<Arc<AppState>>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Response {
    let req = match body {
        Ok(Json(req)) => req,
        Err(rejection) => {
            error!("Error in summarize API: {}", rejection);
            return error_response();
        }
    };

    match state.summarizer.summarize(&req.messages).await {
        Ok(summary) => {
            info!("Streaming summary for {}", summary.video_id);
            Sse::new(summary_events(summary))
                .keep_alive(KeepAlive::default())
                .into_response()
        }
        Err(e) => {
            error!("Error in summarize API: {}", e);
            error_response()
        }
    }
}

fn error_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: SUMMARIZE_ERROR.to_string(),
        }),
    )
        .into_response()
}

/// Turn a summary into server-sent events.
///
/// Emits `video` first, one `summary` per chunk carrying the delta and the
/// rendering of all text so far, then `done`. A failing chunk emits `error`
/// instead of `done` and ends the stream.
pub fn summary_events(summary: Summary) -> impl Stream<Item = Result<Event, Infallible>> {
    let Summary { video_id, text } = summary;

    let video = json_event(
        "video",
        &VideoEvent {
            video_id: video_id.clone(),
            embed_url: embed_url(&video_id),
        },
    );

    let state = EventState {
        video_id,
        text,
        full: String::new(),
        finished: false,
    };

    let chunks = stream::unfold(state, |mut state| async move {
        if state.finished {
            return None;
        }

        let event = match state.text.next().await {
            Some(Ok(delta)) => {
                state.full.push_str(&delta);
                json_event(
                    "summary",
                    &SummaryEvent {
                        delta: &delta,
                        html: render_html(&state.full),
                    },
                )
            }
            Some(Err(e)) => {
                error!("Summary stream for {} failed: {}", state.video_id, e);
                state.finished = true;
                json_event(
                    "error",
                    &ErrorResponse {
                        error: SUMMARIZE_ERROR.to_string(),
                    },
                )
            }
            None => {
                info!(
                    "Finished summary for {} ({} characters)",
                    state.video_id,
                    state.full.len()
                );
                state.finished = true;
                Event::default().event("done").data("")
            }
        };

        Some((event, state))
    });

    stream::once(async move { video }).chain(chunks).map(Ok)
}

struct EventState {
    video_id: String,
    text: TextStream,
    full: String,
    finished: bool,
}

fn json_event<T: Serialize>(name: &str, payload: &T) -> Event {
    let data = match serde_json::to_string(payload) {
        Ok(data) => data,
        Err(e) => {
            error!("Failed to serialize {} event: {}", name, e);
            String::new()
        }
    };
    Event::default().event(name).data(data)
}

//! HTTP server command.

use crate::cli::{preflight, Output};
use crate::config::Settings;
use crate::server::{router, AppState};
use crate::summarizer::Summarizer;
use std::sync::Arc;

/// Run the HTTP server.
pub async fn run_serve(
    host: Option<String>,
    port: Option<u16>,
    mut settings: Settings,
) -> anyhow::Result<()> {
    if let Some(host) = host {
        settings.server.host = host;
    }
    if let Some(port) = port {
        settings.server.port = port;
    }

    if let Err(e) = preflight::check() {
        Output::warning(&format!("{} Summaries will fail until it is set.", e));
    }

    let summarizer = Summarizer::from_settings(&settings)?;
    let app = router(Arc::new(AppState::new(summarizer)));

    let addr = settings.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    Output::header("Recap Server");
    Output::success(&format!("Listening on http://{}", addr));
    Output::kv("Model", &settings.llm.model);
    Output::kv("Web UI", "GET  /");
    Output::kv("Summarize", "POST /api/chat");
    Output::kv("Health", "GET  /health");
    Output::info("Press Ctrl+C to stop the server.");

    axum::serve(listener, app).await?;

    Ok(())
}

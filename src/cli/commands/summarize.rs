//! Summarize command implementation.

use crate::cli::{preflight, Output};
use crate::config::Settings;
use crate::message::ChatMessage;
use crate::render::render_html;
use crate::summarizer::Summarizer;
use crate::video::watch_url;
use anyhow::Result;
use futures::StreamExt;
use std::io::Write;

/// Run the summarize command.
pub async fn run_summarize(url: &str, html: Option<String>, settings: Settings) -> Result<()> {
    if let Err(e) = preflight::check() {
        Output::error(&format!("{}", e));
        Output::info("Run 'recap doctor' for detailed diagnostics.");
        return Err(e.into());
    }

    let summarizer = Summarizer::from_settings(&settings)?;

    let spinner = Output::spinner("Fetching transcript...");
    let summary = match summarizer.summarize(&[ChatMessage::user(url)]).await {
        Ok(summary) => {
            spinner.finish_and_clear();
            summary
        }
        Err(e) => {
            spinner.finish_and_clear();
            Output::error(&format!("Failed to summarize video: {}", e));
            return Err(e.into());
        }
    };

    Output::info(&format!("Summarizing {}", watch_url(&summary.video_id)));
    eprintln!();

    let mut text = summary.text;
    let mut full = String::new();
    let mut stdout = std::io::stdout();

    while let Some(chunk) = text.next().await {
        let chunk = chunk?;
        stdout.write_all(chunk.as_bytes())?;
        stdout.flush()?;
        full.push_str(&chunk);
    }
    println!();

    if let Some(path) = html {
        let path = Settings::expand_path(&path);
        std::fs::write(&path, render_html(&full))?;
        Output::success(&format!("Wrote HTML summary to {}", path.display()));
    }

    Ok(())
}

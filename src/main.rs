//! Recap CLI entry point.

use anyhow::Result;
use clap::Parser;
use recap::cli::{commands, Cli, Commands};
use recap::config::Settings;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(std::env::var("RUST_LOG").unwrap_or_else(|_| {
            format!("recap={0},tower_http={0}", log_level)
        })))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // Load configuration
    let settings = match &cli.config {
        Some(path) => Settings::load_from(Some(&Settings::expand_path(path)))?,
        None => Settings::load()?,
    };

    match &cli.command {
        Commands::Serve { host, port } => {
            commands::run_serve(host.clone(), *port, settings).await?;
        }

        Commands::Summarize { url, html } => {
            commands::run_summarize(url, html.clone(), settings).await?;
        }

        Commands::Doctor => {
            commands::run_doctor(&settings, cli.config.as_deref())?;
        }

        Commands::Config { action } => {
            commands::run_config(action, settings, cli.config.as_deref())?;
        }
    }

    Ok(())
}

//! CLI module for Recap.

pub mod commands;
mod output;
pub mod preflight;

pub use output::Output;

use clap::{Parser, Subcommand};

/// Recap - YouTube video summaries
///
/// Fetches a video's transcript and streams a structured summary from Gemini,
/// either to the browser (serve) or to the terminal (summarize).
#[derive(Parser, Debug)]
#[command(name = "recap")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the web UI and summarize API
    Serve {
        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Summarize a video in the terminal
    Summarize {
        /// YouTube watch URL (must carry a v= parameter)
        url: String,

        /// Also write the rendered HTML summary to this file
        #[arg(long)]
        html: Option<String>,
    },

    /// Check API key and configuration
    Doctor,

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,
}

//! Main entry point for the application.
//!
//! Loads `.env`, parses flags, initializes logging, merges the optional YAML
//! config file, then serves `POST /v1/chat/completions`. Every conversation
//! received there is printed as a transcript or as JSON, to stdout or to a
//! file that must not exist yet.

mod api;
mod chat;
mod cli;
mod config;
mod constants;
mod errors;
mod render;
mod utils;

use std::process::ExitCode;

use clap::Parser;
use config::{FileConfig, Settings, Target};
use tracing::{debug, error, info};

/// Main entry point that initializes and runs the server.
///
/// # Initialization steps:
/// 1. Load environment variables
/// 2. Parse CLI arguments
/// 3. Initialize logging system
/// 4. Resolve settings from flags and config file
/// 5. Serve until the listener fails
#[tokio::main]
async fn main() -> ExitCode {
    let dotenv = dotenvy::dotenv();
    let cli = cli::Cli::parse();
    utils::init_logging(&cli.logging_level, cli.log_file);

    if let Err(e) = dotenv {
        debug!("No .env file loaded: {}", e);
    }

    let file_config = match cli.config.clone().or_else(config::default_config_path) {
        Some(path) => match config::load_file_config(&path) {
            Ok(c) => c,
            Err(e) => {
                error!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => FileConfig::default(),
    };

    let settings = Settings::resolve(&cli, file_config);
    if settings.render.color {
        // Styled output is wanted even when stdout is piped
        colored::control::set_override(true);
    }

    match &settings.render.target {
        Target::Stdout => info!("Writing {:?} output to stdout", settings.render.format),
        Target::File(path) => info!(
            "Writing {:?} output to {}",
            settings.render.format,
            path.display()
        ),
    }

    if let Err(e) = api::server::launch_server(&settings.server, settings.render).await {
        error!("Failed to start server: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

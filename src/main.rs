//! Mancala - unified CLI
//!
//! Game server and terminal client in one binary.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use mancala::{GameConfig, SessionManager};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve {
            port,
            host,
            config,
            pits,
            stones,
        } => {
            let config = load_config(config, pits, stones, None)?;
            run_server(host, port, config).await
        }
        Command::Play {
            server_url,
            name,
            opponent,
            config,
            pits,
            stones,
            delay_ms,
        } => {
            let config = load_config(config, pits, stones, delay_ms)?;
            mancala::tui::run(mancala::tui::PlayOptions {
                server_url,
                name,
                opponent,
                config,
            })
            .await
        }
    }
}

/// Loads the settings file, if any, and applies CLI overrides.
fn load_config(
    path: Option<PathBuf>,
    pits: Option<usize>,
    stones: Option<u32>,
    delay_ms: Option<u64>,
) -> Result<GameConfig> {
    let config = match path {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };
    Ok(config.with_overrides(pits, stones, delay_ms))
}

/// Run the HTTP game server
async fn run_server(host: String, port: u16, config: GameConfig) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!(port, "Starting mancala game server");

    let sessions = SessionManager::new(*config.pits(), *config.stones());
    let app = mancala::router(sessions);

    let listener = tokio::net::TcpListener::bind((host.as_str(), port)).await?;
    info!("Server ready at http://{}:{}/", host, port);

    axum::serve(listener, app).await?;

    Ok(())
}

//! Command-line interface for mancala.

use clap::{Parser, Subcommand};
use mancala::PlayerType;
use std::path::PathBuf;

/// Mancala - game server and terminal client
#[derive(Parser, Debug)]
#[command(name = "mancala")]
#[command(about = "Mancala game service with a heuristic opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP game server
    Serve {
        /// Port to bind to
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Path to a TOML settings file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Pits per side (overrides the settings file)
        #[arg(long)]
        pits: Option<usize>,

        /// Stones per pit (overrides the settings file)
        #[arg(long)]
        stones: Option<u32>,
    },

    /// Play in the terminal
    Play {
        /// Game server URL. If not provided, runs against a local game.
        #[arg(long)]
        server_url: Option<String>,

        /// Name for the south seat
        #[arg(long, default_value = "Player 1")]
        name: String,

        /// Opponent type (human or agent)
        #[arg(long, default_value = "agent")]
        opponent: PlayerType,

        /// Path to a TOML settings file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Pits per side (overrides the settings file)
        #[arg(long)]
        pits: Option<usize>,

        /// Stones per pit (overrides the settings file)
        #[arg(long)]
        stones: Option<u32>,

        /// Agent move delay in milliseconds (overrides the settings file)
        #[arg(long)]
        delay_ms: Option<u64>,
    },
}

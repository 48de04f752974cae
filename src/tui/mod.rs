//! Terminal client for mancala.
//!
//! Runs in two modes: standalone against an in-process game, or as a
//! thin client polling a remote game server over its REST API.

mod app;
mod orchestrator;
mod rest_client;
mod seats;
mod ui;

use crate::config::GameConfig;
use crate::games::mancala::{GameStatus, Side};
use crate::session::{Player, PlayerType, SessionManager};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use app::App;
use orchestrator::Orchestrator;
use rest_client::RestGameClient;
use seats::{AgentSeat, HumanSeat, Seat};

/// Options for a `play` invocation.
#[derive(Debug, Clone)]
pub struct PlayOptions {
    /// Remote server URL; `None` plays against a local game.
    pub server_url: Option<String>,
    /// Name for the south seat.
    pub name: String,
    /// Opponent type for the north seat.
    pub opponent: PlayerType,
    /// Board layout and pacing settings.
    pub config: GameConfig,
}

impl PlayOptions {
    fn opponent_player(&self) -> Player {
        match self.opponent {
            PlayerType::Agent => Player::agent("Agent"),
            PlayerType::Human => Player::human("Player 2"),
        }
    }
}

/// Runs the terminal client.
pub async fn run(options: PlayOptions) -> Result<()> {
    // Log to a file so the alternate screen stays clean.
    let log_file = std::fs::File::create("mancala_tui.log")?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("Starting mancala TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = match &options.server_url {
        Some(url) => run_remote_game(&mut terminal, url.clone(), &options).await,
        None => run_local_game(&mut terminal, &options).await,
    };

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

enum LoopAction {
    Quit,
    Restart,
}

/// Standalone loop: a local registry, two seats, one orchestrator task
/// per game. Restarting starts a fresh game in the same registry.
async fn run_local_game<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    options: &PlayOptions,
) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: std::error::Error + Send + Sync + 'static,
{
    let sessions = SessionManager::new(*options.config.pits(), *options.config.stones());
    let delay = Duration::from_millis(*options.config.agent_delay_ms());
    let mut app = App::new();

    loop {
        app.restart();
        let game_id = sessions.create_game(
            Player::human(options.name.clone()),
            Some(options.opponent_player()),
        );

        let (event_tx, mut event_rx) = mpsc::unbounded_channel();
        let (input_tx, input_rx) = mpsc::unbounded_channel();
        let input_rx = Arc::new(tokio::sync::Mutex::new(input_rx));

        let south: Box<dyn Seat> =
            Box::new(HumanSeat::new(options.name.clone(), input_rx.clone()));
        let north: Box<dyn Seat> = match options.opponent {
            PlayerType::Agent => {
                Box::new(AgentSeat::new("Agent", sessions.clone(), game_id, delay))
            }
            PlayerType::Human => Box::new(HumanSeat::new("Player 2", input_rx.clone())),
        };

        let mut orchestrator =
            Orchestrator::new(sessions.clone(), game_id, [south, north], event_tx);
        let game_task = tokio::spawn(async move { orchestrator.run().await });

        let action = loop {
            while let Ok(game_event) = event_rx.try_recv() {
                app.handle_event(game_event);
            }

            terminal.draw(|frame| ui::draw(frame, &app.view()))?;

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    match key.code {
                        KeyCode::Char('q') => break LoopAction::Quit,
                        KeyCode::Char('r') if app.is_game_over() => break LoopAction::Restart,
                        code => {
                            debug!(?code, "Forwarding key to seats");
                            let _ = input_tx.send(code);
                        }
                    }
                }
            }
        };

        game_task.abort();
        match action {
            LoopAction::Quit => return Ok(()),
            LoopAction::Restart => {
                info!("Restarting game");
            }
        }
    }
}

/// Thin client loop against a remote server: poll state, draw, send
/// moves. The server runs any agent turns a move triggers.
async fn run_remote_game<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    url: String,
    options: &PlayOptions,
) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: std::error::Error + Send + Sync + 'static,
{
    use tokio::time::sleep;

    info!(server_url = %url, "Connecting to game server");
    let client = RestGameClient::new(url);
    let mut state = client.create_game(&options.name, options.opponent).await?;
    let game_id = state.id;
    let mut status = format!("Playing as {}.", options.name);

    loop {
        let pits = (state.board.len() - 2) / 2;
        terminal.draw(|frame| ui::draw(frame, &remote_view(&state, options, &status)))?;

        // The final board stays up until the player quits.
        if state.status == GameStatus::Over {
            if event::poll(Duration::from_millis(200))? {
                if let Event::Key(key) = event::read()?
                    && key.code == KeyCode::Char('q')
                {
                    info!("User quit");
                    return Ok(());
                }
            }
            continue;
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') => {
                        info!("User quit");
                        return Ok(());
                    }
                    KeyCode::Char(c) if c.is_ascii_digit() => {
                        if let Some(digit) = c.to_digit(10) {
                            let pit = digit as usize;
                            if (1..=pits).contains(&pit) {
                                match client.make_move(game_id, pit).await {
                                    Ok(response) => {
                                        status = response.message.clone();
                                        state = response.game_state;
                                    }
                                    Err(e) => {
                                        warn!(error = %e, "Move failed");
                                        status = format!("Move failed: {}", e);
                                    }
                                }
                            }
                        }
                    }
                    _ => {}
                }
            }
        }

        // Pick up moves made by the other seat.
        match client.get_state(game_id).await {
            Ok(fresh) => state = fresh,
            Err(e) => warn!(error = %e, "Failed to refresh state, retrying"),
        }

        sleep(Duration::from_millis(200)).await;
    }
}

fn remote_view(
    state: &crate::server::GameStateBody,
    options: &PlayOptions,
    status: &str,
) -> ui::GameView {
    let pits = (state.board.len() - 2) / 2;
    let current_side = (state.status == GameStatus::Active)
        .then(|| Side::from_index(state.current_player as usize))
        .flatten();

    let status_line = if state.status == GameStatus::Over {
        let verdict = match state.winner {
            Some(-1) => "The game ended in a draw!".to_string(),
            Some(0) => format!("{} wins!", options.name),
            Some(_) => format!("{} wins!", options.opponent_player().name),
            None => "Game over!".to_string(),
        };
        format!("{} Press 'q' to quit.", verdict)
    } else {
        status.to_string()
    };

    ui::GameView {
        board: state.board.clone(),
        current_side,
        names: [options.name.clone(), options.opponent_player().name],
        status: status_line,
        help: format!("Keys: 1-{} select pit, 'q' quit", pits),
    }
}

//! Stateless board rendering.

use crate::games::mancala::Side;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Slots in wire order; empty before the first snapshot arrives.
    pub board: Vec<u32>,
    /// Side to move, while the game is live.
    pub current_side: Option<Side>,
    /// Seat display names, south first.
    pub names: [String; 2],
    /// Status line under the board.
    pub status: String,
    /// Key help line.
    pub help: String,
}

/// Renders the full client frame.
pub fn draw(frame: &mut Frame, view: &GameView) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),  // Title
            Constraint::Min(11),    // Board
            Constraint::Length(3),  // Status
            Constraint::Length(1),  // Help
        ])
        .split(area);

    let title = Paragraph::new("Mancala")
        .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], view);

    let status = Paragraph::new(view.status.as_str())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(view.help.as_str())
        .style(Style::default().fg(Color::Magenta))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, view: &GameView) {
    if view.board.is_empty() {
        let waiting = Paragraph::new("Setting up the board...").alignment(Alignment::Center);
        frame.render_widget(waiting, area);
        return;
    }

    let board = Paragraph::new(board_lines(view)).alignment(Alignment::Center);
    frame.render_widget(board, area);
}

/// Lays the board out the classic way: north's row on top running right
/// to left, stores flanking the rows, south's row beneath running left
/// to right. Pit labels show the 1-based numbers each seat plays.
fn board_lines(view: &GameView) -> Vec<Line<'static>> {
    let board = &view.board;
    let pits = (board.len() - 2) / 2;
    let south_store = pits;
    let north_store = 2 * pits + 1;

    let south_style = side_style(Color::Cyan, view.current_side == Some(Side::South));
    let north_style = side_style(Color::Yellow, view.current_side == Some(Side::North));
    let label_style = Style::default().fg(Color::DarkGray);
    let store_style = Style::default().add_modifier(Modifier::BOLD);

    let north_labels: String = (1..=pits).rev().map(|n| format!("  ({n})  ")).collect();
    let north_counts: String = board[pits + 1..=2 * pits]
        .iter()
        .rev()
        .map(|count| format!("[{:^5}]", count))
        .collect();
    let south_counts: String = board[0..pits]
        .iter()
        .map(|count| format!("[{:^5}]", count))
        .collect();
    let south_labels: String = (1..=pits).map(|n| format!("  ({n})  ")).collect();

    let stores = format!(
        "[{:^4}]{}[{:^4}]",
        board[north_store],
        " ".repeat(pits * 7),
        board[south_store],
    );

    vec![
        Line::styled(format!("{} (north)", view.names[1]), north_style),
        Line::default(),
        Line::styled(north_labels, label_style),
        Line::styled(north_counts, north_style),
        Line::styled(stores, store_style),
        Line::styled(south_counts, south_style),
        Line::styled(south_labels, label_style),
        Line::default(),
        Line::styled(format!("{} (south)", view.names[0]), south_style),
    ]
}

fn side_style(color: Color, to_move: bool) -> Style {
    let style = Style::default().fg(color);
    if to_move {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

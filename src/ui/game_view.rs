use super::board_widget::{board_lines, Palette};
use crate::game::{GameEngine, Phase};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, engine: &GameEngine, selected_column: usize, message: &Option<String>) {
    let board_height = board_area_height(engine.board().height());
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),         // Header
            Constraint::Min(board_height), // Board
            Constraint::Length(3),         // Message
            Constraint::Length(3),         // Controls
        ])
        .split(frame.area());

    let palette = Palette::from_players(engine.players());
    render_header(frame, engine, &palette, chunks[0]);
    render_board(frame, engine, &palette, selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

/// Rows needed for the board plus its header, borders and selection marker.
fn board_area_height(rows: usize) -> u16 {
    u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(4)
}

fn render_header(frame: &mut Frame, engine: &GameEngine, palette: &Palette, area: Rect) {
    let current = engine.current_player();

    let (status, color) = match engine.phase() {
        Phase::InProgress => (
            format!(
                "{} ({}) to move  |  move {}",
                current.id(),
                current.label(),
                engine.moves_played() + 1
            ),
            palette.color(current.id()),
        ),
        Phase::Won(winner) => (
            format!("Game Over  |  {} wins", winner),
            palette.color(winner),
        ),
        Phase::Tied => ("Game Over  |  Tie".to_string(), Color::White),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    engine: &GameEngine,
    palette: &Palette,
    selected_column: usize,
    area: Rect,
) {
    let lines = board_lines(engine.board(), palette, selected_column);
    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from("←/→: Move  |  Enter: Drop  |  1-9: Drop in column  |  R: Restart  |  Q: Quit");

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}

use std::str::FromStr;

use crate::game::{Board, Cell, PlayerId, Players};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Piece colours for the two players, taken from their labels when a label
/// names a colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    player1: Color,
    player2: Color,
}

impl Palette {
    pub fn from_players(players: &Players) -> Self {
        Palette {
            player1: label_color(players.get(PlayerId::One).label(), Color::Red),
            player2: label_color(players.get(PlayerId::Two).label(), Color::Yellow),
        }
    }

    pub fn color(&self, id: PlayerId) -> Color {
        match id {
            PlayerId::One => self.player1,
            PlayerId::Two => self.player2,
        }
    }
}

fn label_color(label: &str, fallback: Color) -> Color {
    Color::from_str(label.trim()).unwrap_or(fallback)
}

/// Board rows framed with a column header and a selection marker underneath.
pub fn board_lines(board: &Board, palette: &Palette, selected_column: usize) -> Vec<Line<'static>> {
    let width = board.width();
    let mut lines = Vec::with_capacity(board.height() + 4);

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")];
    for col in 0..width {
        let label = format!("{:^3}", col + 1);
        if col == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  "));
    lines.push(Line::from(col_line));

    let rule = "═".repeat(width * 3 + 1);
    lines.push(Line::from(format!("  ╔{rule}╗")));

    for row in 0..board.height() {
        let mut row_spans = vec![Span::raw("  ║")];
        for col in 0..width {
            let (symbol, color) = match board.get(row, col) {
                Cell::Empty => (" . ", Color::DarkGray),
                Cell::Occupied(id) => (" ● ", palette.color(id)),
            };
            row_spans.push(Span::styled(symbol, Style::default().fg(color)));
        }
        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{rule}╝")));

    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..width {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    lines
}

//! Headless front-end: feeds a scripted list of columns to the engine and
//! reports each result as a line of text.

use crate::error::MoveError;
use crate::game::{GameEngine, Outcome, PlayerId};
use tracing::debug;

/// Transcript of a scripted game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replay {
    pub lines: Vec<String>,
    /// First move the engine refused, with its 1-based position in the script.
    pub rejected: Option<(usize, MoveError)>,
}

/// Split `script` on whitespace and commas.
pub fn split_moves(script: &str) -> impl Iterator<Item = &str> {
    script
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
}

/// Play every column in `script`, stopping at the first rejected move.
pub fn replay(engine: &mut GameEngine, script: &str) -> Replay {
    let mut lines = Vec::new();

    for (index, token) in split_moves(script).enumerate() {
        let mover = engine.current_player().id();
        let result = engine
            .parse_column(token)
            .and_then(|column| engine.drop_piece(column));

        match result {
            Ok(outcome) => {
                debug!(?outcome, "replayed move");
                lines.push(describe(engine, mover, &outcome));
            }
            Err(err) => {
                lines.push(format!("move {}: {err}", index + 1));
                return Replay {
                    lines,
                    rejected: Some((index + 1, err)),
                };
            }
        }
    }

    Replay {
        lines,
        rejected: None,
    }
}

fn describe(engine: &GameEngine, mover: PlayerId, outcome: &Outcome) -> String {
    let (row, column) = outcome.position();
    let placed = format!("{mover} -> row {row}, column {column}");
    match *outcome {
        Outcome::Continue { next_player, .. } => {
            format!("{placed}; {next_player} to move")
        }
        Outcome::Win { winner, .. } => {
            format!("{placed}; {winner} ({}) wins!", engine.player(winner).label())
        }
        Outcome::Tie { .. } => format!("{placed}; tie!"),
    }
}

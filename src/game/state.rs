use std::num::{IntErrorKind, ParseIntError};

use tracing::{debug, info, instrument};

use super::win::wins_through;
use super::{Board, Player, PlayerId, Players};
use crate::error::{BoardError, MoveError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    InProgress,
    Won(PlayerId),
    Tied,
}

/// What a successful drop did. Every variant carries where the piece landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue {
        row: usize,
        column: usize,
        next_player: PlayerId,
    },
    Win {
        row: usize,
        column: usize,
        winner: PlayerId,
    },
    Tie {
        row: usize,
        column: usize,
    },
}

impl Outcome {
    /// Cell the piece landed in
    pub fn position(&self) -> (usize, usize) {
        match *self {
            Outcome::Continue { row, column, .. }
            | Outcome::Win { row, column, .. }
            | Outcome::Tie { row, column } => (row, column),
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Continue { .. })
    }
}

/// Rules engine for one game: a board, two players, and whose turn it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    players: Players,
    current_player: PlayerId,
    phase: Phase,
    moves_played: usize,
}

impl GameEngine {
    /// Start a game on an empty `width` x `height` board. Player 1 moves first.
    pub fn new(
        width: usize,
        height: usize,
        player1_label: impl Into<String>,
        player2_label: impl Into<String>,
    ) -> Result<Self, BoardError> {
        Ok(GameEngine {
            board: Board::new(width, height)?,
            players: Players::new(player1_label, player2_label),
            current_player: PlayerId::One,
            phase: Phase::InProgress,
            moves_played: 0,
        })
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &Players {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        self.players.get(id)
    }

    /// Player whose turn it is. After a win this is still the winner.
    pub fn current_player(&self) -> &Player {
        self.players.get(self.current_player)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.phase != Phase::InProgress
    }

    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// Get list of legal columns (not full). Empty once the game is over.
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.legal_columns()
    }

    /// Drop the current player's piece into `column`.
    ///
    /// On error nothing changes: not the board, not the turn, not the phase.
    #[instrument(skip(self), fields(player = self.current_player.number()))]
    pub fn drop_piece(&mut self, column: usize) -> Result<Outcome, MoveError> {
        if column >= self.board.width() {
            return Err(MoveError::invalid_column(column, self.board.width()));
        }
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let row = self
            .board
            .top_empty_row(column)?
            .ok_or(MoveError::ColumnFull { column })?;

        let mover = self.current_player;
        self.board.place(row, column, mover);
        self.moves_played += 1;
        debug!(row, column, "piece placed");

        // Win is checked before tie: filling the last cell with a four counts
        // as a win.
        if wins_through(&self.board, row, column) {
            self.phase = Phase::Won(mover);
            info!(winner = mover.number(), moves = self.moves_played, "game won");
            return Ok(Outcome::Win {
                row,
                column,
                winner: mover,
            });
        }

        if self.board.is_full() {
            self.phase = Phase::Tied;
            info!(moves = self.moves_played, "game tied");
            return Ok(Outcome::Tie { row, column });
        }

        self.current_player = mover.other();
        Ok(Outcome::Continue {
            row,
            column,
            next_player: self.current_player,
        })
    }

    /// Apply a move and return new state (immutable)
    pub fn apply(&self, column: usize) -> Result<(GameEngine, Outcome), MoveError> {
        let mut next = self.clone();
        let outcome = next.drop_piece(column)?;
        Ok((next, outcome))
    }

    /// Parse a column typed by a user. Anything that is not a column of this
    /// board, including negative numbers, is rejected.
    pub fn parse_column(&self, input: &str) -> Result<usize, MoveError> {
        let trimmed = input.trim();
        // Integers too large for i64 are still integers, just off the board
        let column: i64 = trimmed.parse().or_else(|err: ParseIntError| match err.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(MoveError::Unparseable {
                input: trimmed.to_string(),
            }),
        })?;
        let width = self.board.width();
        usize::try_from(column)
            .ok()
            .filter(|&col| col < width)
            .ok_or(MoveError::InvalidColumn { column, width })
    }
}

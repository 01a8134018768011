//! Core Connect Four rules: board representation, players, win detection, and
//! the game state machine that ties them together.

mod board;
mod player;
mod state;
mod win;

pub use board::{Board, Cell, DEFAULT_COLS, DEFAULT_ROWS};
pub use player::{Player, PlayerId, Players};
pub use state::{GameEngine, Outcome, Phase};
pub use win::{has_win, wins_through, WIN_LENGTH};

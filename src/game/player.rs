use std::fmt;

use super::board::Cell;

/// Identity of a seat at the table. Doubles as the mark left on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// Get the other player
    pub fn other(self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        Cell::Occupied(self)
    }

    /// 1 or 2
    pub fn number(self) -> u8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }

    fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// A player plus the display label the front-end chose for them.
///
/// The label is opaque to the rules; the terminal UI reads it as a colour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    label: String,
}

impl Player {
    pub fn new(id: PlayerId, label: impl Into<String>) -> Self {
        Player {
            id,
            label: label.into(),
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn mark(&self) -> PlayerId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// The two players of one game, indexed by [`PlayerId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Players([Player; 2]);

impl Players {
    pub fn new(player1_label: impl Into<String>, player2_label: impl Into<String>) -> Self {
        Players([
            Player::new(PlayerId::One, player1_label),
            Player::new(PlayerId::Two, player2_label),
        ])
    }

    pub fn get(&self, id: PlayerId) -> &Player {
        &self.0[id.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.0.iter()
    }
}

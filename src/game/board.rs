use std::fmt;

use super::player::PlayerId;
use crate::error::{BoardError, MoveError};

pub const DEFAULT_COLS: usize = 7;
pub const DEFAULT_ROWS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(PlayerId),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Fixed-size grid of cells. Row 0 is the top, row `height - 1` the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Vec<Cell>>,
}

impl Board {
    /// Create a new empty board. Both dimensions must be positive.
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::InvalidDimensions { width, height });
        }
        Ok(Board {
            width,
            height,
            cells: vec![vec![Cell::Empty; width]; height],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Signed so that probes stepping off the grid answer false instead of
    /// wrapping.
    pub fn is_within_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.height && (col as usize) < self.width
    }

    /// Lowest unoccupied row in `col`, or `None` if the column is full.
    pub fn top_empty_row(&self, col: usize) -> Result<Option<usize>, MoveError> {
        if col >= self.width {
            return Err(MoveError::invalid_column(col, self.width));
        }

        Ok((0..self.height)
            .rev()
            .find(|&row| self.cells[row][col].is_empty()))
    }

    /// Put `mark` at `(row, col)`.
    ///
    /// The caller must have already resolved the cell through
    /// [`Board::top_empty_row`]. Placing out of bounds or over an occupied
    /// cell is an invariant violation and panics.
    pub fn place(&mut self, row: usize, col: usize, mark: PlayerId) {
        assert!(
            row < self.height && col < self.width,
            "invariant violation: ({row}, {col}) is outside a {}x{} board",
            self.width,
            self.height
        );
        let cell = &mut self.cells[row][col];
        assert!(
            cell.is_empty(),
            "invariant violation: ({row}, {col}) is already occupied"
        );
        *cell = mark.to_cell();
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.width {
            return true;
        }
        !self.cells[0][col].is_empty()
    }

    /// Columns that can still take a piece, left to right.
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.width)
            .filter(|&col| !self.is_column_full(col))
            .collect()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|cell| !cell.is_empty()))
    }
}

impl Default for Board {
    fn default() -> Self {
        Board {
            width: DEFAULT_COLS,
            height: DEFAULT_ROWS,
            cells: vec![vec![Cell::Empty; DEFAULT_COLS]; DEFAULT_ROWS],
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: Vec<&str> = row
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => ".",
                    Cell::Occupied(PlayerId::One) => "1",
                    Cell::Occupied(PlayerId::Two) => "2",
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        let footer: Vec<String> = (0..self.width).map(|col| (col % 10).to_string()).collect();
        write!(f, "{}", footer.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drop_into(board: &mut Board, col: usize, mark: PlayerId) -> usize {
        let row = board.top_empty_row(col).unwrap().unwrap();
        board.place(row, col, mark);
        row
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(7, 6).unwrap();
        for row in 0..board.height() {
            for col in 0..board.width() {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert_eq!(board, Board::default());
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            Board::new(0, 6),
            Err(BoardError::InvalidDimensions { width: 0, height: 6 })
        );
        assert!(Board::new(7, 0).is_err());
    }

    #[test]
    fn test_within_bounds() {
        let board = Board::new(7, 6).unwrap();
        assert!(board.is_within_bounds(0, 0));
        assert!(board.is_within_bounds(5, 6));
        assert!(!board.is_within_bounds(6, 0));
        assert!(!board.is_within_bounds(0, 7));
        assert!(!board.is_within_bounds(-1, 3));
        assert!(!board.is_within_bounds(2, -1));
    }

    #[test]
    fn test_top_empty_row_stacks_from_bottom() {
        let mut board = Board::new(7, 6).unwrap();
        assert_eq!(board.top_empty_row(3), Ok(Some(5)));

        assert_eq!(drop_into(&mut board, 3, PlayerId::One), 5);
        assert_eq!(board.get(5, 3), Cell::Occupied(PlayerId::One));

        assert_eq!(drop_into(&mut board, 3, PlayerId::Two), 4);
        assert_eq!(board.top_empty_row(3), Ok(Some(3)));
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new(4, 3).unwrap();
        for _ in 0..board.height() {
            drop_into(&mut board, 0, PlayerId::One);
        }

        assert!(board.is_column_full(0));
        assert_eq!(board.top_empty_row(0), Ok(None));
        assert_eq!(board.legal_columns(), vec![1, 2, 3]);
    }

    #[test]
    fn test_invalid_column() {
        let board = Board::new(7, 6).unwrap();
        assert_eq!(
            board.top_empty_row(7),
            Err(MoveError::InvalidColumn { column: 7, width: 7 })
        );
        assert!(board.is_column_full(7));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new(3, 2).unwrap();
        for col in 0..board.width() {
            assert!(!board.is_full());
            for _ in 0..board.height() {
                drop_into(&mut board, col, PlayerId::Two);
            }
        }
        assert!(board.is_full());
        assert!(board.legal_columns().is_empty());
    }

    #[test]
    #[should_panic(expected = "already occupied")]
    fn test_place_on_occupied_cell_panics() {
        let mut board = Board::new(7, 6).unwrap();
        board.place(5, 0, PlayerId::One);
        board.place(5, 0, PlayerId::Two);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_place_out_of_bounds_panics() {
        let mut board = Board::new(7, 6).unwrap();
        board.place(6, 0, PlayerId::One);
    }

    #[test]
    fn test_display() {
        let mut board = Board::new(4, 2).unwrap();
        drop_into(&mut board, 1, PlayerId::One);
        drop_into(&mut board, 1, PlayerId::Two);
        assert_eq!(board.to_string(), ". 2 . .\n. 1 . .\n0 1 2 3");
    }
}

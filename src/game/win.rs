//! Four-in-a-row detection.

use super::board::{Board, Cell};
use super::player::PlayerId;

pub const WIN_LENGTH: usize = 4;

/// Horizontal, vertical, diagonal down-right, diagonal down-left.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Full-grid scan: does `mark` own any line of four anywhere on the board?
pub fn has_win(board: &Board, mark: PlayerId) -> bool {
    let target = Cell::Occupied(mark);
    (0..board.height() as isize).any(|y| {
        (0..board.width() as isize).any(|x| {
            DIRECTIONS.iter().any(|&(dy, dx)| {
                (0..WIN_LENGTH as isize).all(|k| {
                    let (row, col) = (y + k * dy, x + k * dx);
                    board.is_within_bounds(row, col)
                        && board.get(row as usize, col as usize) == target
                })
            })
        })
    })
}

/// Check if the piece at (row, col) sits on a line of four of its own mark.
///
/// Only the four lines through the cell are walked, so this is the check to
/// run right after a placement.
pub fn wins_through(board: &Board, row: usize, col: usize) -> bool {
    let cell = board.get(row, col);
    if cell.is_empty() {
        return false;
    }

    DIRECTIONS.iter().any(|&(dy, dx)| {
        // Count the current piece, then walk both ways
        let count = 1 + run_length(board, row, col, dy, dx, cell)
            + run_length(board, row, col, -dy, -dx, cell);
        count >= WIN_LENGTH
    })
}

fn run_length(board: &Board, row: usize, col: usize, dy: isize, dx: isize, cell: Cell) -> usize {
    let mut r = row as isize + dy;
    let mut c = col as isize + dx;
    let mut count = 0;
    while board.is_within_bounds(r, c) && board.get(r as usize, c as usize) == cell {
        count += 1;
        r += dy;
        c += dx;
    }
    count
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
    fn test_empty_board_has_no_win() {
        let board = Board::new(7, 6).unwrap();
        assert!(!has_win(&board, PlayerId::One));
        assert!(!has_win(&board, PlayerId::Two));
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::new(7, 6).unwrap();
        for col in 0..4 {
            drop_into(&mut board, col, PlayerId::One);
        }
        assert!(has_win(&board, PlayerId::One));
        assert!(!has_win(&board, PlayerId::Two));
        assert!(wins_through(&board, 5, 2));
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::new(7, 6).unwrap();
        let mut row = 0;
        for _ in 0..4 {
            row = drop_into(&mut board, 3, PlayerId::Two);
        }
        assert!(has_win(&board, PlayerId::Two));
        assert!(wins_through(&board, row, 3));
    }

    #[test]
    fn test_diagonal_up_win() {
        let mut board = Board::new(7, 6).unwrap();
        // Create diagonal / pattern
        drop_into(&mut board, 0, PlayerId::One);

        drop_into(&mut board, 1, PlayerId::Two);
        drop_into(&mut board, 1, PlayerId::One);

        drop_into(&mut board, 2, PlayerId::Two);
        drop_into(&mut board, 2, PlayerId::Two);
        drop_into(&mut board, 2, PlayerId::One);

        drop_into(&mut board, 3, PlayerId::Two);
        drop_into(&mut board, 3, PlayerId::Two);
        drop_into(&mut board, 3, PlayerId::Two);
        assert!(!has_win(&board, PlayerId::One));
        let row = drop_into(&mut board, 3, PlayerId::One);

        assert!(has_win(&board, PlayerId::One));
        assert!(wins_through(&board, row, 3));
    }

    #[test]
    fn test_diagonal_down_win() {
        let mut board = Board::new(7, 6).unwrap();
        // Create diagonal \ pattern
        drop_into(&mut board, 6, PlayerId::One);

        drop_into(&mut board, 5, PlayerId::Two);
        drop_into(&mut board, 5, PlayerId::One);

        drop_into(&mut board, 4, PlayerId::Two);
        drop_into(&mut board, 4, PlayerId::Two);
        drop_into(&mut board, 4, PlayerId::One);

        drop_into(&mut board, 3, PlayerId::Two);
        drop_into(&mut board, 3, PlayerId::Two);
        drop_into(&mut board, 3, PlayerId::Two);
        let row = drop_into(&mut board, 3, PlayerId::One);

        assert!(has_win(&board, PlayerId::One));
        assert!(!has_win(&board, PlayerId::Two));
        assert!(wins_through(&board, row, 3));
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::new(7, 6).unwrap();
        for col in 0..3 {
            drop_into(&mut board, col, PlayerId::One);
        }
        assert!(!has_win(&board, PlayerId::One));
        assert!(!wins_through(&board, 5, 1));
    }

    #[test]
    fn test_line_does_not_wrap_across_rows() {
        // Three at the right edge of the bottom row, one at the left edge of
        // the row above: adjacent in row-major order but not a line.
        let mut board = Board::new(7, 6).unwrap();
        for col in 4..7 {
            drop_into(&mut board, col, PlayerId::One);
        }
        drop_into(&mut board, 0, PlayerId::Two);
        drop_into(&mut board, 0, PlayerId::One);
        assert!(!has_win(&board, PlayerId::One));
    }

    #[test]
    fn test_board_too_small_for_four() {
        let mut board = Board::new(3, 3).unwrap();
        for col in 0..3 {
            for _ in 0..3 {
                drop_into(&mut board, col, PlayerId::One);
            }
        }
        assert!(!has_win(&board, PlayerId::One));
        assert!(!wins_through(&board, 1, 1));
    }

    #[test]
    fn test_wins_through_empty_cell_is_false() {
        let board = Board::new(7, 6).unwrap();
        assert!(!wins_through(&board, 5, 0));
    }

    #[test]
    fn test_wins_through_agrees_with_full_scan() {
        // Pseudo-random but fixed sequence of columns; after every drop the
        // local check through the new piece must match the full scan.
        let mut board = Board::new(7, 6).unwrap();
        let mut mark = PlayerId::One;
        let columns = [3, 3, 4, 2, 5, 6, 2, 4, 1, 1, 0, 5, 5, 4, 6, 2, 3, 0];
        for &col in &columns {
            let Some(row) = board.top_empty_row(col).unwrap() else {
                continue;
            };
            board.place(row, col, mark);
            assert_eq!(wins_through(&board, row, col), has_win(&board, mark));
            if has_win(&board, mark) {
                assert!(!has_win(&board, mark.other()));
                break;
            }
            mark = mark.other();
        }
    }
}

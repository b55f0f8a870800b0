use super::board::{Board, empty_cells};
use super::types::{Mark, Outcome};

/// Rows, columns, then the two diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// First line, in `LINES` order, held entirely by one mark.
pub fn winning_line(board: &Board) -> Option<(Mark, [usize; 3])> {
    let cells = board.cells();
    LINES.iter().find_map(|&[a, b, c]| {
        let mark = cells[a];
        if mark != Mark::Empty && mark == cells[b] && mark == cells[c] {
            Some((mark, [a, b, c]))
        } else {
            None
        }
    })
}

pub fn winner(board: &Board) -> Outcome {
    match winning_line(board) {
        Some((Mark::X, _)) => Outcome::XWon,
        Some((Mark::O, _)) => Outcome::OWon,
        Some((Mark::Empty, _)) => unreachable!(),
        None if empty_cells(board).is_empty() => Outcome::Draw,
        None => Outcome::InProgress,
    }
}

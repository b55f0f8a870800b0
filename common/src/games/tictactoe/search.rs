use super::board::{Board, empty_cells};
use super::types::{Mark, Outcome};
use super::win_detector::winner;

pub const WIN_SCORE: i32 = 10;
pub const LOSS_SCORE: i32 = -10;
pub const DRAW_SCORE: i32 = 0;

/// Exhaustive minimax value of `board` from O's side. O maximizes, X
/// minimizes. Terminal scores are not adjusted for depth, so a win found
/// five plies out is worth the same as an immediate one.
pub fn score(board: Board, maximizing_turn: bool) -> i32 {
    match winner(&board) {
        Outcome::OWon => return WIN_SCORE,
        Outcome::XWon => return LOSS_SCORE,
        Outcome::Draw | Outcome::InProgress => {}
    }

    let moves = empty_cells(&board);
    if moves.is_empty() {
        return DRAW_SCORE;
    }

    if maximizing_turn {
        moves
            .into_iter()
            .map(|index| score(board.with_mark(index, Mark::O), false))
            .max()
            .unwrap_or(DRAW_SCORE)
    } else {
        moves
            .into_iter()
            .map(|index| score(board.with_mark(index, Mark::X), true))
            .min()
            .unwrap_or(DRAW_SCORE)
    }
}

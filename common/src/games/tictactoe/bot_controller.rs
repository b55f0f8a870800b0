use crate::games::{Difficulty, SessionRng};
use super::board::{Board, empty_cells};
use super::search::score;
use super::types::Mark;

/// Chance that a medium bot plays the optimal move instead of a random one.
pub const MEDIUM_OPTIMAL_CHANCE: f64 = 0.5;

/// Picks O's next cell, or `None` when the board is full.
pub fn choose_move(board: &Board, difficulty: Difficulty, rng: &mut SessionRng) -> Option<usize> {
    let available = empty_cells(board);
    if available.is_empty() {
        return None;
    }

    match difficulty {
        Difficulty::Easy => random_move(&available, rng),
        Difficulty::Medium => {
            if rng.chance(MEDIUM_OPTIMAL_CHANCE) {
                optimal_move(board)
            } else {
                random_move(&available, rng)
            }
        }
        Difficulty::Hard => optimal_move(board),
    }
}

fn random_move(available: &[usize], rng: &mut SessionRng) -> Option<usize> {
    rng.choose(available).copied()
}

/// Best cell for O by full minimax. Ties keep the lowest index.
pub fn optimal_move(board: &Board) -> Option<usize> {
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for index in empty_cells(board) {
        let candidate = score(board.with_mark(index, Mark::O), false);
        if candidate > best_score {
            best_score = candidate;
            best_move = Some(index);
        }
    }

    best_move
}

mod board;
mod bot_controller;
mod game_state;
mod search;
mod types;
mod win_detector;

pub use board::{Board, CELL_COUNT, empty_cells};
pub use bot_controller::{MEDIUM_OPTIMAL_CHANCE, choose_move, optimal_move};
pub use game_state::{BOT_MARK, HUMAN_MARK, TicTacToeMatch};
pub use search::{DRAW_SCORE, LOSS_SCORE, WIN_SCORE, score};
pub use types::{Mark, MatchResult, Outcome, Position};
pub use win_detector::{LINES, winner, winning_line};

use crate::games::{Difficulty, SessionRng};
use super::board::Board;
use super::bot_controller::choose_move;
use super::types::{Mark, MatchResult, Outcome};
use super::win_detector::{winner, winning_line};

pub const HUMAN_MARK: Mark = Mark::X;
pub const BOT_MARK: Mark = Mark::O;

/// One human-vs-bot game. The human plays X and always moves first.
#[derive(Debug, Clone)]
pub struct TicTacToeMatch {
    board: Board,
    difficulty: Difficulty,
    status: Outcome,
    last_bot_move: Option<usize>,
}

impl TicTacToeMatch {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            board: Board::new(),
            difficulty,
            status: Outcome::InProgress,
            last_bot_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn status(&self) -> Outcome {
        self.status
    }

    pub fn result(&self) -> Option<MatchResult> {
        MatchResult::from_outcome(self.status)
    }

    pub fn last_bot_move(&self) -> Option<usize> {
        self.last_bot_move
    }

    pub fn winning_line(&self) -> Option<[usize; 3]> {
        winning_line(&self.board).map(|(_, line)| line)
    }

    /// Plays the human's mark at `index`, then lets the bot answer if the
    /// game is still on. Returns the bot's cell when it moved.
    pub fn place_mark(&mut self, index: usize, rng: &mut SessionRng) -> Result<Option<usize>, String> {
        if self.status.is_over() {
            return Err("Game is already over".to_string());
        }

        match self.board.get(index) {
            None => return Err("Position out of bounds".to_string()),
            Some(Mark::Empty) => {}
            Some(_) => return Err("Cell is already marked".to_string()),
        }

        self.board.set(index, HUMAN_MARK)?;
        self.last_bot_move = None;
        self.status = winner(&self.board);
        if self.status.is_over() {
            return Ok(None);
        }

        let bot_move = choose_move(&self.board, self.difficulty, rng);
        if let Some(bot_index) = bot_move {
            self.board.set(bot_index, BOT_MARK)?;
            self.last_bot_move = Some(bot_index);
            self.status = winner(&self.board);
        }

        Ok(bot_move)
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.difficulty);
    }
}

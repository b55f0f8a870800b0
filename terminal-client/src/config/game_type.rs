use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameType {
    TicTacToe,
    Memory,
    Reaction,
    NumberGuess,
    Math,
    Typing,
}

impl GameType {
    pub fn title(&self) -> &'static str {
        match self {
            GameType::TicTacToe => "Tic Tac Toe",
            GameType::Memory => "Memory Match",
            GameType::Reaction => "Reaction Test",
            GameType::NumberGuess => "Number Guess",
            GameType::Math => "Math Battle",
            GameType::Typing => "Typing Test",
        }
    }
}

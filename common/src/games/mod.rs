mod difficulty;
mod session_rng;

pub mod math_battle;
pub mod memory_match;
pub mod number_guess;
pub mod reaction;
pub mod tictactoe;
pub mod typing_test;

pub use difficulty::Difficulty;
pub use session_rng::SessionRng;

mod math_runner;
mod memory_runner;
mod number_guess_runner;
mod reaction_runner;
mod tictactoe_runner;
mod typing_runner;

pub use math_runner::run_math_round;
pub use memory_runner::run_memory_game;
pub use number_guess_runner::run_number_guess_game;
pub use reaction_runner::{run_reaction_game, spawn_key_listener};
pub use tictactoe_runner::run_tictactoe_game;
pub use typing_runner::run_typing_test;

mod config;
mod game_type;
mod memory_config;
mod number_guess_config;
mod tictactoe_config;

pub use config::{Config, get_config_manager, remember_last_game};
pub use game_type::GameType;
pub use memory_config::MemoryConfig;
pub use number_guess_config::NumberGuessConfig;
pub use tictactoe_config::TicTacToeConfig;

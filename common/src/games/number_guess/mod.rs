mod game_state;

pub use game_state::{GuessHint, GuessResult, MAX_ATTEMPTS, NumberGuessGame, max_number};

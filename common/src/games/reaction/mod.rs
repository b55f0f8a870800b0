mod game_state;

pub use game_state::{MAX_DELAY_MS, MIN_DELAY_MS, ReactionPhase, ReactionTimer};

mod deck;
mod game_state;

pub use deck::{Deck, MAX_PAIRS, MemoryLayout};
pub use game_state::{Card, FlipResult, MemoryGameState};

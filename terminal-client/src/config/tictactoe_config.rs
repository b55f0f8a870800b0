use arcade_common::config::Validate;
use serde::{Deserialize, Serialize};

pub const MAX_DELAY_MS: u64 = 5000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct TicTacToeConfig {
    /// Pause before the bot's reply is shown.
    pub bot_delay_ms: u64,
}

impl Validate for TicTacToeConfig {
    fn validate(&self) -> Result<(), String> {
        if self.bot_delay_ms > MAX_DELAY_MS {
            return Err(format!(
                "tictactoe.bot_delay_ms must not exceed {} ms",
                MAX_DELAY_MS
            ));
        }
        Ok(())
    }
}

impl Default for TicTacToeConfig {
    fn default() -> Self {
        Self { bot_delay_ms: 400 }
    }
}

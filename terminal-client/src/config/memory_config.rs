use arcade_common::config::Validate;
use serde::{Deserialize, Serialize};

use super::tictactoe_config::MAX_DELAY_MS;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct MemoryConfig {
    pub mismatch_delay_ms: u64,
}

impl Validate for MemoryConfig {
    fn validate(&self) -> Result<(), String> {
        if self.mismatch_delay_ms > MAX_DELAY_MS {
            return Err(format!(
                "memory.mismatch_delay_ms must not exceed {} ms",
                MAX_DELAY_MS
            ));
        }
        Ok(())
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            mismatch_delay_ms: 800,
        }
    }
}

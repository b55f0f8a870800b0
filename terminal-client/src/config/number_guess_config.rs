use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct NumberGuessConfig {
    pub show_history: bool,
}

impl Default for NumberGuessConfig {
    fn default() -> Self {
        Self { show_history: true }
    }
}

use arcade_common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use arcade_common::games::Difficulty;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::{GameType, MemoryConfig, NumberGuessConfig, TicTacToeConfig};

const CONFIG_FILE_NAME: &str = "arcade_config.yaml";

fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    override_path: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(override_path.unwrap_or_else(get_config_path))
}

/// Stores `game_type` as the game to replay next time. Re-reads the file
/// first, so a file that fails to load is left untouched.
pub fn remember_last_game(
    config_manager: &ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>,
    game_type: GameType,
) -> Result<(), String> {
    let mut config = config_manager.get_config()?;
    config.last_game = Some(game_type);
    config_manager.set_config(&config)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub default_difficulty: Difficulty,
    #[serde(default)]
    pub tictactoe: TicTacToeConfig,
    #[serde(default)]
    pub memory: MemoryConfig,
    #[serde(default)]
    pub number_guess: NumberGuessConfig,
    #[serde(default)]
    pub last_game: Option<GameType>,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.tictactoe.validate()?;
        self.memory.validate()?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_difficulty: Difficulty::Medium,
            tictactoe: TicTacToeConfig::default(),
            memory: MemoryConfig::default(),
            number_guess: NumberGuessConfig::default(),
            last_game: None,
        }
    }
}

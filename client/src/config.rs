use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tictactoe_engine::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use tictactoe_engine::tictactoe::BotType;

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";
pub const MAX_GAMES: u32 = 10_000;

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager() -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(get_config_path())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum PlayerKind {
    Human,
    Random,
    Minimax,
}

impl PlayerKind {
    pub fn bot_type(&self) -> Option<BotType> {
        match self {
            PlayerKind::Human => None,
            PlayerKind::Random => Some(BotType::Random),
            PlayerKind::Minimax => Some(BotType::Minimax),
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub player_x: PlayerKind,
    pub player_o: PlayerKind,
    pub games: u32,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if self.games == 0 {
            return Err("games must be greater than 0".to_string());
        }
        if self.games > MAX_GAMES {
            return Err(format!("games must not exceed {}", MAX_GAMES));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            player_x: PlayerKind::Human,
            player_o: PlayerKind::Minimax,
            games: 1,
            seed: None,
        }
    }
}

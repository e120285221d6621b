use std::path::Path;

use serde::{Deserialize, Serialize};
use tictactoe_common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use tictactoe_common::games::tictactoe::TicTacToeSessionSettings;

pub const CONFIG_FILE: &str = "tictactoe_client_config.yaml";
const MAX_PREFIX_LEN: usize = 32;

pub type ClientConfigManager = ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>;

pub fn get_config_manager(path: Option<&Path>) -> ClientConfigManager {
    match path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(CONFIG_FILE),
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub game: TicTacToeSessionSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.logging.validate()
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct LoggingConfig {
    pub prefix: Option<String>,
    pub verbose: bool,
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(prefix) = &self.prefix {
            if prefix.trim().is_empty() {
                return Err("logging prefix must not be empty".to_string());
            }
            if prefix.chars().count() > MAX_PREFIX_LEN {
                return Err(format!(
                    "logging prefix must not exceed {} characters",
                    MAX_PREFIX_LEN
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_common::config::{ConfigContentProvider, ConfigSerializer};
    use tictactoe_common::games::tictactoe::MarkChoice;

    fn get_temp_file_path() -> std::path::PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_tictactoe_client_config_{}.yaml", random_number))
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: Config = serializer.deserialize(&serialized).unwrap();
        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_config_survives_file_round_trip() {
        let path = get_temp_file_path();
        let manager = get_config_manager(Some(&path));
        let config = Config {
            game: TicTacToeSessionSettings { human_mark: MarkChoice::Random },
            logging: LoggingConfig {
                prefix: Some("Client".to_string()),
                verbose: true,
            },
        };
        manager.set_config(&config).unwrap();

        let reloaded = get_config_manager(Some(&path)).get_config().unwrap();
        assert_eq!(reloaded, config);

        let raw = manager.content_provider().get_config_content().unwrap().unwrap();
        assert!(raw.contains("human_mark: random"));
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_logging_section_is_optional() {
        let serializer = YamlConfigSerializer::new();
        let config: Config = serializer.deserialize("game:\n  human_mark: o\n").unwrap();
        assert_eq!(config.game.human_mark, MarkChoice::O);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_prefix_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.logging.prefix = Some("  ".to_string());
        assert!(config.validate().is_err());

        config.logging.prefix = Some("p".repeat(MAX_PREFIX_LEN + 1));
        assert!(config.validate().is_err());
    }
}

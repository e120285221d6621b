use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Mutex;

use super::{
    ConfigContentProvider, ConfigError, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

/// Loads, validates and caches a config; the first successful load or save wins the cache.
pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: Mutex<Option<TConfig>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: impl Into<PathBuf>) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path),
            YamlConfigSerializer::new(),
        )
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(
        config_content_provider: TConfigContentProvider,
        config_serializer: TConfigSerializer,
    ) -> Self {
        Self {
            config: Mutex::new(None),
            config_content_provider,
            config_serializer,
        }
    }

    pub fn content_provider(&self) -> &TConfigContentProvider {
        &self.config_content_provider
    }

    /// Stored config, or `TConfig::default()` when nothing is stored yet.
    pub fn get_config(&self) -> Result<TConfig, ConfigError> {
        let mut current = self.config.lock().map_err(|_| ConfigError::Poisoned)?;

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        if let Some(config_data) = self.config_content_provider.get_config_content()? {
            let config = self.config_serializer.deserialize(&config_data)?;
            config.validate().map_err(ConfigError::Invalid)?;

            *current = Some(config.clone());
            return Ok(config);
        }

        Ok(TConfig::default())
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), ConfigError> {
        config.validate().map_err(ConfigError::Invalid)?;

        let serialized_config = self.config_serializer.serialize(config)?;
        self.config_content_provider
            .set_config_content(&serialized_config)?;

        let mut current = self.config.lock().map_err(|_| ConfigError::Poisoned)?;
        *current = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MemoryProvider {
        content: RefCell<Option<String>>,
    }

    impl MemoryProvider {
        fn with_content(content: &str) -> Self {
            Self {
                content: RefCell::new(Some(content.to_string())),
            }
        }
    }

    impl ConfigContentProvider for MemoryProvider {
        fn get_config_content(&self) -> Result<Option<String>, ConfigError> {
            Ok(self.content.borrow().clone())
        }

        fn set_config_content(&self, content: &str) -> Result<(), ConfigError> {
            *self.content.borrow_mut() = Some(content.to_string());
            Ok(())
        }
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct SampleConfig {
        name: String,
        level: u32,
    }

    impl Default for SampleConfig {
        fn default() -> Self {
            Self {
                name: "default".to_string(),
                level: 1,
            }
        }
    }

    impl Validate for SampleConfig {
        fn validate(&self) -> Result<(), String> {
            if self.level > 10 {
                return Err("level must not exceed 10".to_string());
            }
            Ok(())
        }
    }

    fn manager(
        provider: MemoryProvider,
    ) -> ConfigManager<MemoryProvider, SampleConfig, YamlConfigSerializer> {
        ConfigManager::new(provider, YamlConfigSerializer::new())
    }

    #[test]
    fn test_missing_content_yields_default() {
        let manager = manager(MemoryProvider::default());
        assert_eq!(manager.get_config().unwrap(), SampleConfig::default());
    }

    #[test]
    fn test_stored_content_is_parsed() {
        let manager = manager(MemoryProvider::with_content("name: stored\nlevel: 4\n"));
        let config = manager.get_config().unwrap();
        assert_eq!(config.name, "stored");
        assert_eq!(config.level, 4);
    }

    #[test]
    fn test_invalid_content_is_rejected() {
        let manager = manager(MemoryProvider::with_content("name: loud\nlevel: 11\n"));
        assert!(matches!(manager.get_config(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_malformed_content_fails_to_deserialize() {
        let manager = manager(MemoryProvider::with_content("level: [not a number"));
        assert!(matches!(manager.get_config(), Err(ConfigError::Deserialize(_))));
    }

    #[test]
    fn test_set_config_validates_and_persists() {
        let manager = manager(MemoryProvider::default());
        let bad = SampleConfig { name: "bad".to_string(), level: 99 };
        assert!(matches!(manager.set_config(&bad), Err(ConfigError::Invalid(_))));
        assert!(manager.content_provider().content.borrow().is_none());

        let good = SampleConfig { name: "good".to_string(), level: 2 };
        manager.set_config(&good).unwrap();
        assert_eq!(manager.get_config().unwrap(), good);
        assert!(manager.content_provider().content.borrow().is_some());
    }

    #[test]
    fn test_loaded_config_is_cached() {
        let manager = manager(MemoryProvider::with_content("name: first\nlevel: 3\n"));
        let first = manager.get_config().unwrap();
        manager
            .content_provider()
            .content
            .replace(Some("name: second\nlevel: 5\n".to_string()));
        assert_eq!(manager.get_config().unwrap(), first);
    }
}

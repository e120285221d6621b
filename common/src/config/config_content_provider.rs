use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::ConfigError;

pub trait ConfigContentProvider {
    /// `Ok(None)` means no config has been stored yet.
    fn get_config_content(&self) -> Result<Option<String>, ConfigError>;
    fn set_config_content(&self, content: &str) -> Result<(), ConfigError>;
}

#[derive(Debug, Clone)]
pub struct FileContentConfigProvider {
    file_path: PathBuf,
}

impl FileContentConfigProvider {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

impl ConfigContentProvider for FileContentConfigProvider {
    fn get_config_content(&self) -> Result<Option<String>, ConfigError> {
        match std::fs::read_to_string(&self.file_path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(ConfigError::Read {
                path: self.file_path.clone(),
                source,
            }),
        }
    }

    fn set_config_content(&self, content: &str) -> Result<(), ConfigError> {
        std::fs::write(&self.file_path, content).map_err(|source| ConfigError::Write {
            path: self.file_path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_tictactoe_config_{}.yaml", random_number))
    }

    #[test]
    fn test_missing_file_has_no_content() {
        let provider = FileContentConfigProvider::new(get_temp_file_path());
        assert!(matches!(provider.get_config_content(), Ok(None)));
    }

    #[test]
    fn test_written_content_is_read_back() {
        let path = get_temp_file_path();
        let provider = FileContentConfigProvider::new(path.clone());
        provider.set_config_content("human_mark: o\n").unwrap();
        let content = provider.get_config_content().unwrap();
        assert_eq!(content.as_deref(), Some("human_mark: o\n"));
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_unwritable_path_reports_write_error() {
        let dir = std::env::temp_dir();
        let provider = FileContentConfigProvider::new(dir);
        assert!(matches!(
            provider.set_config_content("x"),
            Err(ConfigError::Write { .. })
        ));
    }
}

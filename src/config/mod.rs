//! Configuration management module.
//!
//! This module handles loading, saving, and managing application configuration,
//! including the task API base URL, theme and log level preferences.

mod error;

pub use error::ConfigError;

use crate::api::DEFAULT_BASE_URL;
use crate::error::AppError;
use crate::ui::{Theme, DEFAULT_THEME_NAME};
use log::{warn, LevelFilter};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    str::FromStr,
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/tasks-tui";

/// Oversees management of configuration file.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub base_url: String,
    pub theme_name: String,
    pub log_level: String,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file. Every key is optional.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_theme_name() -> String {
    DEFAULT_THEME_NAME.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance holding default values.
    ///
    pub fn new() -> Config {
        Config {
            base_url: default_base_url(),
            theme_name: default_theme_name(),
            log_level: default_log_level(),
            file_path: None,
        }
    }

    /// Try to load an existing configuration from the disk using the custom
    /// directory if provided, otherwise the default directory. If no file
    /// exists yet, write one holding the defaults.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
        // Use default path unless custom path provided
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|source| ConfigError::CreateDirectory {
                path: dir_path.clone(),
                source,
            })?;
        }

        let file_path = dir_path.join(Path::new(FILE_NAME));
        self.file_path = Some(file_path.clone());

        if file_path.exists() {
            let contents = fs::read_to_string(&file_path).map_err(|source| ConfigError::Read {
                path: file_path.clone(),
                source,
            })?;
            let data: FileSpec = if contents.trim().is_empty() {
                FileSpec::from(&Config::new())
            } else {
                serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
                    path: file_path.clone(),
                    source,
                })?
            };
            self.base_url = data.base_url;
            self.theme_name = data.theme_name;
            self.log_level = data.log_level;
        } else {
            self.save()?;
        }

        Ok(())
    }

    /// Serialize the configuration and write it to the disk.
    ///
    pub fn save(&self) -> Result<(), AppError> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let content = serde_yaml::to_string(&FileSpec::from(self)).map_err(ConfigError::from)?;

        if let Some(parent) = file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|source| ConfigError::CreateDirectory {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let write_error = |source| ConfigError::Write {
            path: file_path.clone(),
            source,
        };
        let mut file = fs::File::create(file_path).map_err(write_error)?;
        file.write_all(content.as_bytes()).map_err(write_error)?;
        file.flush().map_err(write_error)?;
        Ok(())
    }

    /// Return the path of the loaded configuration file, if any.
    ///
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Return the configured log level.
    ///
    pub fn log_level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }

    /// Return the configured theme, falling back to the default for unknown names.
    ///
    pub fn theme(&self) -> Theme {
        Theme::from_name(&self.theme_name).unwrap_or_else(|| {
            warn!(
                "Unknown theme '{}', available themes: {}",
                self.theme_name,
                Theme::available_themes().join(", ")
            );
            Theme::default()
        })
    }

    /// Returns the path buffer for the default configuration directory or an
    /// error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, AppError> {
        match dirs::home_dir() {
            Some(home) => Ok(home.join(Path::new(DEFAULT_DIRECTORY_PATH))),
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}

impl From<&Config> for FileSpec {
    fn from(config: &Config) -> Self {
        FileSpec {
            base_url: config.base_url.clone(),
            theme_name: config.theme_name.clone(),
            log_level: config.log_level.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::uuid::UUIDv4;
    use fake::Fake;
    use uuid::Uuid;

    fn temp_dir() -> PathBuf {
        let id: Uuid = UUIDv4.fake();
        std::env::temp_dir().join(format!("tasks-tui-test-{}", id))
    }

    #[test]
    fn new_has_defaults() {
        let config = Config::new();
        assert_eq!(config.base_url, "http://localhost:3000/api/tasks");
        assert_eq!(config.theme_name, "tokyo-night");
        assert_eq!(config.log_level_filter().unwrap(), LevelFilter::Info);
        assert!(config.file_path().is_none());
    }

    #[test]
    fn load_missing_file_writes_defaults() {
        let dir = temp_dir();
        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();
        let file_path = dir.join(FILE_NAME);
        assert!(file_path.exists());
        assert_eq!(config.file_path(), Some(file_path.as_path()));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn load_partial_file_fills_defaults() {
        let dir = temp_dir();
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(FILE_NAME), "base_url: http://tasks.local/api/tasks\n").unwrap();

        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();
        assert_eq!(config.base_url, "http://tasks.local/api/tasks");
        assert_eq!(config.theme_name, DEFAULT_THEME_NAME);
        assert_eq!(config.log_level, "info");
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn save_then_load_keeps_values() {
        let dir = temp_dir();
        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();
        config.theme_name = "dracula".to_string();
        config.log_level = "debug".to_string();
        config.save().unwrap();

        let mut reloaded = Config::new();
        reloaded.load(dir.to_str()).unwrap();
        assert_eq!(reloaded.theme_name, "dracula");
        assert_eq!(reloaded.log_level_filter().unwrap(), LevelFilter::Debug);
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn load_invalid_yaml_fails() {
        let dir = temp_dir();
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(FILE_NAME), "base_url: [unclosed\n").unwrap();

        let mut config = Config::new();
        let result = config.load(dir.to_str());
        assert!(matches!(
            result,
            Err(AppError::Config(ConfigError::Parse { .. }))
        ));
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn save_without_path_fails() {
        assert!(matches!(
            Config::new().save(),
            Err(AppError::Config(ConfigError::FilePathNotSet))
        ));
    }

    #[test]
    fn invalid_log_level() {
        let config = Config {
            log_level: "loud".to_string(),
            ..Config::new()
        };
        assert!(matches!(
            config.log_level_filter(),
            Err(ConfigError::InvalidLogLevel(level)) if level == "loud"
        ));
    }

    #[test]
    fn unknown_theme_falls_back() {
        let config = Config {
            theme_name: "neon".to_string(),
            ..Config::new()
        };
        assert_eq!(config.theme().name, DEFAULT_THEME_NAME);
    }
}

//! Optional TOML configuration
//!
//! Lives in the platform config directory. Everything has a built-in
//! default, so a missing file is not an error and most installs never
//! create one.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::core::constants::{API_BASE_URL, DEFAULT_USERNAME};

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Username used when the address carries no `=` token
    pub default_username: Option<String>,
    /// Override for the users endpoint base URL
    pub api_base_url: Option<String>,
}

impl Config {
    pub fn load() -> Result<Config, Box<dyn std::error::Error>> {
        let config_path = Self::get_config_path();
        Self::load_from_path(&config_path)
    }

    pub fn load_from_path(config_path: &PathBuf) -> Result<Config, Box<dyn std::error::Error>> {
        if config_path.exists() {
            let contents = fs::read_to_string(config_path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save_to_path(&self, config_path: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(config_path, contents)?;
        Ok(())
    }

    pub fn default_username(&self) -> &str {
        self.default_username.as_deref().unwrap_or(DEFAULT_USERNAME)
    }

    pub fn api_base_url(&self) -> &str {
        self.api_base_url.as_deref().unwrap_or(API_BASE_URL)
    }

    fn get_config_path() -> PathBuf {
        match ProjectDirs::from("org", "octocard", "octocard") {
            Some(proj_dirs) => proj_dirs.config_dir().join("config.toml"),
            None => PathBuf::from("config.toml"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.default_username(), "Nadir-bnm");
        assert_eq!(config.api_base_url(), "https://api.github.com/users");
    }

    #[test]
    fn round_trips_through_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config {
            default_username: Some("hubot".to_string()),
            api_base_url: Some("https://ghe.example.com/api/v3/users".to_string()),
        };
        config.save_to_path(&path).unwrap();

        let loaded = Config::load_from_path(&path).unwrap();
        assert_eq!(loaded.default_username(), "hubot");
        assert_eq!(loaded.api_base_url(), "https://ghe.example.com/api/v3/users");
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_username = \"hubot\"\n").unwrap();

        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.default_username(), "hubot");
        assert_eq!(config.api_base_url(), "https://api.github.com/users");
    }
}

//! Configuration management

use crate::error::{Result, ToolbeltError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the per-home settings directory
pub const CONFIG_DIR: &str = ".toolbelt";
const CONFIG_FILE: &str = "config.toml";

/// Keys accepted by `toolbelt config <key> <value>`
pub const SETTABLE_KEYS: [&str; 5] = [
    "log_level",
    "sample_size",
    "page_size",
    "password_length",
    "xkcd_words",
];

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default tracing filter when RUST_LOG is unset
    pub log_level: String,
    /// How many values of a generated dataset to preview
    pub sample_size: usize,
    /// Finance transactions per page
    pub page_size: usize,
    /// Default length for standard passwords and PINs
    pub password_length: usize,
    /// Default word count for XKCD passwords
    pub xkcd_words: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "warn".to_string(),
            sample_size: 20,
            page_size: 10,
            password_length: 12,
            xkcd_words: 4,
            created: None,
        }
    }
}

impl Config {
    /// Fresh config stamped with the creation time
    pub fn new() -> Self {
        Config {
            created: Some(Utc::now()),
            ..Config::default()
        }
    }

    pub fn path_in(dir: &Path) -> PathBuf {
        dir.join(CONFIG_DIR).join(CONFIG_FILE)
    }

    /// Load config from .toolbelt/config.toml in the given directory.
    /// A missing file yields the defaults.
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config = Self::read_from_dir(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse the config file without validating values, so a hand-edited
    /// file with a bad value can still be inspected and repaired.
    pub fn read_from_dir(path: &Path) -> Result<Self> {
        let config_path = Self::path_in(path);

        let contents = match fs::read_to_string(&config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => return Err(ToolbeltError::Io(e)),
        };

        Ok(toml::from_str(&contents)?)
    }

    /// Save config to .toolbelt/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let config_dir = path.join(CONFIG_DIR);

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(Self::path_in(path), contents)?;

        Ok(())
    }

    /// Read one key as display text
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "log_level" => Ok(self.log_level.clone()),
            "sample_size" => Ok(self.sample_size.to_string()),
            "page_size" => Ok(self.page_size.to_string()),
            "password_length" => Ok(self.password_length.to_string()),
            "xkcd_words" => Ok(self.xkcd_words.to_string()),
            "created" => Ok(self
                .created
                .map(|c| c.to_rfc3339())
                .unwrap_or_else(|| "never initialized".to_string())),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set one key from text, validating the new value only
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "log_level" => {
                let level = value.to_lowercase();
                check_log_level(&level)?;
                self.log_level = level;
            }
            "sample_size" => self.sample_size = parse_positive(key, value)?,
            "page_size" => self.page_size = parse_positive(key, value)?,
            "password_length" => self.password_length = parse_positive(key, value)?,
            "xkcd_words" => self.xkcd_words = parse_positive(key, value)?,
            "created" => {
                return Err(ToolbeltError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        check_log_level(&self.log_level)?;
        for (key, value) in [
            ("sample_size", self.sample_size),
            ("page_size", self.page_size),
            ("password_length", self.password_length),
            ("xkcd_words", self.xkcd_words),
        ] {
            if value == 0 {
                return Err(ToolbeltError::Config(format!(
                    "{} must be greater than zero",
                    key
                )));
            }
        }
        Ok(())
    }
}

fn check_log_level(level: &str) -> Result<()> {
    if !LOG_LEVELS.contains(&level) {
        return Err(ToolbeltError::Config(format!(
            "Invalid log_level: '{}'. Valid levels are: {}",
            level,
            LOG_LEVELS.join(", ")
        )));
    }
    Ok(())
}

fn parse_positive(key: &str, value: &str) -> Result<usize> {
    value
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|v| *v > 0)
        .ok_or_else(|| {
            ToolbeltError::Config(format!(
                "{} must be a positive whole number, got '{}'",
                key, value
            ))
        })
}

fn unknown_key(key: &str) -> ToolbeltError {
    ToolbeltError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: {}, created",
        key,
        SETTABLE_KEYS.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_config() {
        let config = Config::new();
        assert_eq!(config.page_size, 10);
        assert!(config.created.is_some());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::new();
        config.set("page_size", "25").unwrap();

        config.save_to_dir(temp.path()).unwrap();
        assert!(temp.path().join(".toolbelt/config.toml").exists());

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_config_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".toolbelt")).unwrap();
        fs::write(Config::path_in(temp.path()), "xkcd_words = 6\n").unwrap();

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.xkcd_words, 6);
        assert_eq!(loaded.sample_size, 20);
    }

    #[test]
    fn test_invalid_file_rejected() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".toolbelt")).unwrap();
        fs::write(Config::path_in(temp.path()), "log_level = \"loud\"\n").unwrap();

        match Config::load_from_dir(temp.path()).unwrap_err() {
            ToolbeltError::Config(msg) => assert!(msg.contains("Invalid log_level")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_set_repairs_one_key_while_another_is_broken() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".toolbelt")).unwrap();
        fs::write(
            Config::path_in(temp.path()),
            "log_level = \"loud\"\npage_size = 0\n",
        )
        .unwrap();

        let mut config = Config::read_from_dir(temp.path()).unwrap();
        config.set("log_level", "info").unwrap();
        assert!(config.set("log_level", "noisy").is_err());
        assert_eq!(config.log_level, "info");
        config.save_to_dir(temp.path()).unwrap();
        assert!(Config::load_from_dir(temp.path()).is_err());

        config.set("page_size", "5").unwrap();
        config.save_to_dir(temp.path()).unwrap();
        assert_eq!(Config::load_from_dir(temp.path()).unwrap().page_size, 5);
    }

    #[test]
    fn test_malformed_toml_is_deserialize_error() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".toolbelt")).unwrap();
        fs::write(Config::path_in(temp.path()), "page_size = [
").unwrap();

        assert!(matches!(
            Config::load_from_dir(temp.path()),
            Err(ToolbeltError::TomlDeserialize(_))
        ));
    }

    #[test]
    fn test_set_validates() {
        let mut config = Config::default();
        assert!(config.set("page_size", "0").is_err());
        assert!(config.set("page_size", "abc").is_err());
        assert!(config.set("created", "x").is_err());
        assert!(config.set("colour", "x").is_err());
        config.set("log_level", "DEBUG").unwrap();
        assert_eq!(config.get("log_level").unwrap(), "debug");
    }
}

//! Home directory holding the JSON stores and the config directory

use crate::error::{Result, ToolbeltError};
use crate::infrastructure::config::{Config, CONFIG_DIR};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

pub const HOME_ENV: &str = "TOOLBELT_HOME";

pub const NOTES_FILE: &str = "notes.json";
pub const CALENDAR_FILE: &str = "calendar_events.json";
pub const CHEATSHEETS_FILE: &str = "cheatsheets.json";
pub const FINANCE_FILE: &str = "finance_data.json";

/// Abstract access to the persisted stores
pub trait Store {
    /// Load a whole JSON document; a missing file yields `T::default()`
    fn load_json<T: DeserializeOwned + Default>(&self, file: &str) -> Result<T>;

    /// Replace a whole JSON document
    fn save_json<T: Serialize>(&self, file: &str, value: &T) -> Result<()>;
}

/// File system implementation of Store
#[derive(Debug, Clone)]
pub struct Workspace {
    pub root: PathBuf,
}

impl Workspace {
    pub fn new(root: PathBuf) -> Self {
        Workspace { root }
    }

    /// Resolve the home directory.
    /// TOOLBELT_HOME wins when set; otherwise the current directory is used.
    pub fn discover() -> Result<Self> {
        if let Some(home) = std::env::var_os(HOME_ENV) {
            let path = PathBuf::from(home);
            if path.is_dir() {
                return Ok(Workspace::new(path));
            }
            return Err(ToolbeltError::Config(format!(
                "{} is set to '{}' but that directory does not exist. \
                Create it or unset {}.",
                HOME_ENV,
                path.display(),
                HOME_ENV
            )));
        }

        Ok(Workspace::new(std::env::current_dir()?))
    }

    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    /// Config as written, without value validation
    pub fn read_config(&self) -> Result<Config> {
        Config::read_from_dir(&self.root)
    }

    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    /// Check if the config directory exists
    pub fn is_initialized(&self) -> bool {
        self.root.join(CONFIG_DIR).is_dir()
    }

    /// Create the config directory
    pub fn initialize(&self) -> Result<()> {
        let config_dir = self.root.join(CONFIG_DIR);

        if config_dir.exists() {
            return Err(ToolbeltError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir_all(&config_dir)?;
        Ok(())
    }

    /// Write using a best-effort atomic replace:
    /// write to a temp file in the same directory, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so we remove the destination first.
    fn write_atomic(&self, file: &str, content: &str) -> Result<()> {
        let path = self.root.join(file);

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_name = format!(".{}.toolbelt-tmp-{}", file, std::process::id());
        let tmp_path = path.with_file_name(tmp_name);

        fs::write(&tmp_path, content)?;

        #[cfg(windows)]
        if path.exists() {
            fs::remove_file(&path)?;
        }

        fs::rename(&tmp_path, &path)?;
        Ok(())
    }
}

impl Store for Workspace {
    fn load_json<T: DeserializeOwned + Default>(&self, file: &str) -> Result<T> {
        let path = self.root.join(file);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(file, "store missing, starting empty");
                return Ok(T::default());
            }
            Err(e) => return Err(ToolbeltError::Io(e)),
        };

        if contents.trim().is_empty() {
            return Ok(T::default());
        }

        let value = serde_json::from_str(&contents)?;
        debug!(file, bytes = contents.len(), "loaded store");
        Ok(value)
    }

    fn save_json<T: Serialize>(&self, file: &str, value: &T) -> Result<()> {
        let contents = serde_json::to_string_pretty(value)?;
        self.write_atomic(file, &contents)?;
        debug!(file, bytes = contents.len(), "saved store");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::ffi::OsString;
    use std::sync::{Mutex, OnceLock};
    use tempfile::TempDir;

    fn env_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    struct EnvVarRestore {
        key: &'static str,
        previous: Option<OsString>,
    }

    impl EnvVarRestore {
        fn capture(key: &'static str) -> Self {
            Self {
                key,
                previous: std::env::var_os(key),
            }
        }
    }

    impl Drop for EnvVarRestore {
        fn drop(&mut self) {
            if let Some(value) = &self.previous {
                std::env::set_var(self.key, value);
            } else {
                std::env::remove_var(self.key);
            }
        }
    }

    #[test]
    fn test_initialize_twice_fails() {
        let temp = TempDir::new().unwrap();
        let workspace = Workspace::new(temp.path().to_path_buf());

        assert!(!workspace.is_initialized());
        workspace.initialize().unwrap();
        assert!(workspace.is_initialized());

        match workspace.initialize().unwrap_err() {
            ToolbeltError::Config(msg) => assert!(msg.contains("already initialized")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_missing_store_is_default() {
        let temp = TempDir::new().unwrap();
        let workspace = Workspace::new(temp.path().to_path_buf());

        let map: BTreeMap<String, String> = workspace.load_json(CHEATSHEETS_FILE).unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn test_save_then_load_store() {
        let temp = TempDir::new().unwrap();
        let workspace = Workspace::new(temp.path().to_path_buf());

        let mut map = BTreeMap::new();
        map.insert("git".to_string(), "git status".to_string());
        workspace.save_json(CHEATSHEETS_FILE, &map).unwrap();

        let loaded: BTreeMap<String, String> = workspace.load_json(CHEATSHEETS_FILE).unwrap();
        assert_eq!(loaded, map);

        // No temp files left behind
        let leftovers = fs::read_dir(temp.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().contains("toolbelt-tmp"))
            .count();
        assert_eq!(leftovers, 0);
    }

    #[test]
    fn test_malformed_store_is_an_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(NOTES_FILE), "{not json").unwrap();
        let workspace = Workspace::new(temp.path().to_path_buf());

        let result: Result<Vec<String>> = workspace.load_json(NOTES_FILE);
        assert!(matches!(result, Err(ToolbeltError::Json(_))));
    }

    #[test]
    fn test_discover_uses_home_env() {
        let _env_lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture(HOME_ENV);

        let temp = TempDir::new().unwrap();
        std::env::set_var(HOME_ENV, temp.path());

        let workspace = Workspace::discover().unwrap();
        assert_eq!(workspace.root, temp.path());
    }

    #[test]
    fn test_discover_with_missing_home_dir() {
        let _env_lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture(HOME_ENV);

        let temp = TempDir::new().unwrap();
        std::env::set_var(HOME_ENV, temp.path().join("nope"));

        match Workspace::discover().unwrap_err() {
            ToolbeltError::Config(msg) => assert!(msg.contains("does not exist")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_discover_without_home_env() {
        let _env_lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture(HOME_ENV);
        std::env::remove_var(HOME_ENV);

        let workspace = Workspace::discover().unwrap();
        assert_eq!(workspace.root, std::env::current_dir().unwrap());
    }
}

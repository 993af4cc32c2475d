//! Config management use case

use crate::error::Result;
use crate::infrastructure::{Config, Workspace};
use tracing::info;

/// Service for reading and changing the home configuration
pub struct ConfigService {
    workspace: Workspace,
}

impl ConfigService {
    pub fn new(workspace: Workspace) -> Self {
        ConfigService { workspace }
    }

    // Reads skip value validation so a broken file can still be repaired
    // one key at a time.

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        self.workspace.read_config()?.get(key)
    }

    /// Set a config value. Writes the file even when the home was never
    /// initialized, so `config` alone is enough to customise defaults.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.workspace.read_config()?;
        config.set(key, value)?;
        self.workspace.save_config(&config)?;
        info!(key, value, "config updated");
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.workspace.read_config()
    }
}

//! Initialize toolbelt home use case

use crate::error::Result;
use crate::infrastructure::{Config, Workspace};
use std::fs;
use std::path::Path;
use tracing::info;

/// Initialize a toolbelt home at the specified path.
pub fn init(path: &Path) -> Result<Config> {
    // Create the directory if it doesn't exist
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let workspace = Workspace::new(path.to_path_buf());
    workspace.initialize()?;

    let config = Config::new();
    workspace.save_config(&config)?;

    info!(path = %path.display(), "initialized toolbelt home");
    Ok(config)
}

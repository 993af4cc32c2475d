//! Git history visualizer use case

use crate::domain::git_log::{Branch, Commit};
use crate::error::{Result, ToolbeltError};
use crate::infrastructure::GitCli;
use std::path::Path;

pub const DEFAULT_LIMIT: usize = 10;

/// Recent commits of the repository containing `dir`
pub fn log(dir: &Path, branch: Option<&str>, limit: usize) -> Result<Vec<Commit>> {
    if limit == 0 {
        return Err(ToolbeltError::InvalidInput(
            "commit limit must be greater than zero".to_string(),
        ));
    }
    // git would read a leading dash as one of its own options
    if let Some(name) = branch.filter(|b| b.starts_with('-')) {
        return Err(ToolbeltError::InvalidInput(format!(
            "branch name cannot start with '-': '{}'",
            name
        )));
    }
    GitCli::new(dir).log(branch, limit)
}

pub fn branches(dir: &Path) -> Result<Vec<Branch>> {
    GitCli::new(dir).branches()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::process::Command;
    use tempfile::TempDir;

    fn git_available() -> bool {
        Command::new("git").arg("--version").output().is_ok()
    }

    #[test]
    fn test_zero_limit_rejected() {
        let temp = TempDir::new().unwrap();
        assert!(matches!(
            log(temp.path(), None, 0),
            Err(ToolbeltError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_dash_branch_rejected_before_running_git() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("written-by-git");
        let branch = format!("--output={}", target.display());

        assert!(matches!(
            log(temp.path(), Some(&branch), 5),
            Err(ToolbeltError::InvalidInput(_))
        ));
        assert!(!target.exists());
    }

    #[test]
    fn test_outside_repository_is_git_error() {
        if !git_available() {
            return;
        }
        let temp = TempDir::new().unwrap();
        // Skip when the temp dir happens to sit inside a repository
        if Command::new("git")
            .args(["rev-parse", "--git-dir"])
            .current_dir(temp.path())
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
        {
            return;
        }
        assert!(matches!(
            branches(temp.path()),
            Err(ToolbeltError::Git(_))
        ));
    }
}

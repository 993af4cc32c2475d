//! `git` subprocess integration

use crate::domain::git_log::{self, Branch, Commit, LOG_FORMAT};
use crate::error::{Result, ToolbeltError};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// Runs the `git` executable inside one working directory
pub struct GitCli {
    program: String,
    dir: PathBuf,
}

impl GitCli {
    pub fn new(dir: &Path) -> Self {
        GitCli {
            program: "git".to_string(),
            dir: dir.to_path_buf(),
        }
    }

    /// Use a different executable (tests point this at a missing binary)
    pub fn with_program(mut self, program: &str) -> Self {
        self.program = program.to_string();
        self
    }

    /// Most recent commits reachable from `branch` (HEAD when `None`)
    pub fn log(&self, branch: Option<&str>, limit: usize) -> Result<Vec<Commit>> {
        let limit = limit.to_string();
        let mut args = vec!["log"];
        if let Some(branch) = branch {
            args.push(branch);
        }
        args.extend(["-n", limit.as_str(), LOG_FORMAT]);

        let output = self.run(&args)?;
        Ok(git_log::parse_log(&output))
    }

    pub fn branches(&self) -> Result<Vec<Branch>> {
        let output = self.run(&["branch", "--no-color"])?;
        Ok(git_log::parse_branches(&output))
    }

    fn run(&self, args: &[&str]) -> Result<String> {
        debug!(program = %self.program, ?args, dir = %self.dir.display(), "running git");

        let output = Command::new(&self.program)
            .args(args)
            .current_dir(&self.dir)
            .output()
            .map_err(|e| {
                ToolbeltError::Git(format!("Failed to launch '{}': {}", self.program, e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let message = stderr.trim();
            return Err(ToolbeltError::Git(if message.is_empty() {
                format!("'git {}' exited with {}", args.join(" "), output.status)
            } else {
                message.to_string()
            }));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

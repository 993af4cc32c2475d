//! File organizer use case

use crate::domain::organizer::{destination_folder, GroupBy};
use crate::error::{Result, ToolbeltError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// One file to move into a sub-folder of the organized directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedMove {
    pub file_name: String,
    pub folder: String,
    pub from: PathBuf,
    pub to: PathBuf,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrganizeReport {
    pub moved: Vec<PlannedMove>,
    /// Moves left undone, with the reason
    pub skipped: Vec<(PlannedMove, String)>,
}

/// Work out where each regular file directly inside `dir` belongs.
/// Nothing on disk changes.
pub fn plan(dir: &Path, group_by: GroupBy) -> Result<Vec<PlannedMove>> {
    if !dir.is_dir() {
        return Err(ToolbeltError::NotFound(format!(
            "directory '{}'",
            dir.display()
        )));
    }

    let mut moves = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| ToolbeltError::Io(e.into()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let Some(file_name) = entry.file_name().to_str() else {
            debug!(path = %entry.path().display(), "skipping non-UTF-8 file name");
            continue;
        };
        let Some(folder) = destination_folder(file_name, group_by) else {
            continue;
        };

        moves.push(PlannedMove {
            file_name: file_name.to_string(),
            from: entry.path().to_path_buf(),
            to: dir.join(&folder).join(file_name),
            folder,
        });
    }

    debug!(dir = %dir.display(), ?group_by, files = moves.len(), "organize plan built");
    Ok(moves)
}

/// Carry out a plan. Existing files at a destination are never overwritten;
/// such moves are skipped and reported.
pub fn apply(moves: Vec<PlannedMove>) -> Result<OrganizeReport> {
    let mut report = OrganizeReport::default();

    for planned in moves {
        let Some(folder) = planned.to.parent() else {
            continue;
        };

        if folder.exists() && !folder.is_dir() {
            let reason = format!("'{}' exists and is not a folder", folder.display());
            warn!(file = %planned.file_name, %reason, "skipping move");
            report.skipped.push((planned, reason));
            continue;
        }
        if planned.to.exists() {
            let reason = format!("'{}' already exists", planned.to.display());
            warn!(file = %planned.file_name, %reason, "skipping move");
            report.skipped.push((planned, reason));
            continue;
        }

        fs::create_dir_all(folder)?;
        fs::rename(&planned.from, &planned.to)?;
        debug!(from = %planned.from.display(), to = %planned.to.display(), "moved");
        report.moved.push(planned);
    }

    info!(
        moved = report.moved.len(),
        skipped = report.skipped.len(),
        "organize finished"
    );
    Ok(report)
}

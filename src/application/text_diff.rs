//! Text diff use case

use crate::domain::diff::{self, DiffChunk, DiffMode, DiffStats};
use crate::error::{Result, ToolbeltError};
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDiff {
    pub chunks: Vec<DiffChunk>,
    pub stats: DiffStats,
}

/// Compare two text files at the given granularity
pub fn compare_files(old: &Path, new: &Path, mode: DiffMode) -> Result<FileDiff> {
    let old_text = read_text(old)?;
    let new_text = read_text(new)?;

    let chunks = diff::diff(&old_text, &new_text, mode);
    let stats = DiffStats::from_chunks(&chunks);
    debug!(
        ?mode,
        added = stats.added,
        removed = stats.removed,
        unchanged = stats.unchanged,
        "diff computed"
    );
    Ok(FileDiff { chunks, stats })
}

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => {
            ToolbeltError::NotFound(format!("file '{}'", path.display()))
        }
        std::io::ErrorKind::InvalidData => ToolbeltError::InvalidInput(format!(
            "'{}' is not a UTF-8 text file",
            path.display()
        )),
        _ => ToolbeltError::Io(e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_compare_files_by_line() {
        let temp = TempDir::new().unwrap();
        let old = temp.path().join("old.txt");
        let new = temp.path().join("new.txt");
        fs::write(&old, "one\ntwo\nthree\n").unwrap();
        fs::write(&new, "one\n2\nthree\nfour\n").unwrap();

        let result = compare_files(&old, &new, DiffMode::Lines).unwrap();
        assert_eq!(result.stats.added, 2);
        assert_eq!(result.stats.removed, 1);
        assert_eq!(result.stats.unchanged, 2);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let temp = TempDir::new().unwrap();
        let present = temp.path().join("a.txt");
        fs::write(&present, "x").unwrap();

        let result = compare_files(&present, &temp.path().join("b.txt"), DiffMode::Words);
        assert!(matches!(result, Err(ToolbeltError::NotFound(_))));
    }

    #[test]
    fn test_binary_file_rejected() {
        let temp = TempDir::new().unwrap();
        let text = temp.path().join("a.txt");
        let binary = temp.path().join("b.bin");
        fs::write(&text, "x").unwrap();
        fs::write(&binary, [0xff, 0xfe, 0x00]).unwrap();

        assert!(matches!(
            compare_files(&text, &binary, DiffMode::Chars),
            Err(ToolbeltError::InvalidInput(_))
        ));
    }
}

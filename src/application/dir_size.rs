//! Directory size analyzer use case

use crate::error::{Result, ToolbeltError};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// A directory with its recursive size and, down to the requested depth,
/// its sub-directories largest first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeNode {
    pub name: String,
    pub size: u64,
    pub children: Vec<SizeNode>,
}

/// Recursive size of `dir` with a breakdown `depth` levels deep
/// (0 gives the total only). Symlinks are not followed; unreadable entries
/// are skipped with a warning.
pub fn analyze(dir: &Path, depth: usize) -> Result<SizeNode> {
    if !dir.is_dir() {
        return Err(ToolbeltError::NotFound(format!(
            "directory '{}'",
            dir.display()
        )));
    }

    // Size per directory (relative to `dir`) for every directory within `depth`
    let mut sizes: HashMap<PathBuf, u64> = HashMap::new();
    sizes.insert(PathBuf::new(), 0);

    for entry in WalkDir::new(dir).min_depth(1) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "skipping unreadable entry");
                continue;
            }
        };
        let Ok(relative) = entry.path().strip_prefix(dir) else {
            continue;
        };

        if entry.file_type().is_dir() {
            if entry.depth() <= depth {
                sizes.entry(relative.to_path_buf()).or_insert(0);
            }
            continue;
        }
        if !entry.file_type().is_file() {
            continue;
        }

        let len = match entry.metadata() {
            Ok(meta) => meta.len(),
            Err(e) => {
                warn!(path = %entry.path().display(), error = %e, "skipping unreadable file");
                continue;
            }
        };

        // Credit the file to every tracked ancestor
        let mut ancestor = PathBuf::new();
        *sizes.entry(ancestor.clone()).or_insert(0) += len;
        if let Some(parent) = relative.parent() {
            for component in parent.components().take(depth) {
                ancestor.push(component);
                *sizes.entry(ancestor.clone()).or_insert(0) += len;
            }
        }
    }

    let name = dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| dir.display().to_string());
    let mut children: HashMap<&Path, Vec<&Path>> = HashMap::new();
    for path in sizes.keys().filter(|p| !p.as_os_str().is_empty()) {
        if let Some(parent) = path.parent() {
            children.entry(parent).or_default().push(path);
        }
    }
    let root = build_node(name, Path::new(""), &sizes, &children);
    debug!(dir = %dir.display(), size = root.size, depth, "size analysis finished");
    Ok(root)
}

fn build_node(
    name: String,
    relative: &Path,
    sizes: &HashMap<PathBuf, u64>,
    children: &HashMap<&Path, Vec<&Path>>,
) -> SizeNode {
    let mut nodes: Vec<SizeNode> = children
        .get(relative)
        .into_iter()
        .flatten()
        .map(|path| {
            let child_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            build_node(child_name, path, sizes, children)
        })
        .collect();
    nodes.sort_by(|a, b| b.size.cmp(&a.size).then_with(|| a.name.cmp(&b.name)));

    SizeNode {
        name,
        size: sizes.get(relative).copied().unwrap_or(0),
        children: nodes,
    }
}

/// Human readable size with base-1024 units and two decimals
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.2} {}", value, UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(path: &Path, bytes: usize) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, vec![b'x'; bytes]).unwrap();
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(512), "512.00 B");
        assert_eq!(format_size(1024), "1.00 KB");
        assert_eq!(format_size(1536), "1.50 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.00 MB");
        assert_eq!(format_size(1u64 << 50), "1024.00 TB");
    }

    #[test]
    fn test_analyze_totals_and_breakdown() {
        let temp = TempDir::new().unwrap();
        write(&temp.path().join("top.bin"), 10);
        write(&temp.path().join("a/one.bin"), 100);
        write(&temp.path().join("a/deep/two.bin"), 1000);
        write(&temp.path().join("b/three.bin"), 50);

        let root = analyze(temp.path(), 1).unwrap();
        assert_eq!(root.size, 1160);

        let children: Vec<_> = root.children.iter().map(|c| (c.name.as_str(), c.size)).collect();
        assert_eq!(children, vec![("a", 1100), ("b", 50)]);
        // Depth 1 stops before a/deep
        assert!(root.children[0].children.is_empty());

        let deeper = analyze(temp.path(), 2).unwrap();
        assert_eq!(deeper.children[0].children[0].name, "deep");
        assert_eq!(deeper.children[0].children[0].size, 1000);
    }

    #[test]
    fn test_depth_zero_and_empty_dirs() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("empty")).unwrap();

        let root = analyze(temp.path(), 0).unwrap();
        assert_eq!(root.size, 0);
        assert!(root.children.is_empty());

        let shallow = analyze(temp.path(), 1).unwrap();
        assert_eq!(shallow.children[0].name, "empty");
        assert_eq!(shallow.children[0].size, 0);
    }

    #[test]
    fn test_many_nested_dirs_keep_their_own_children() {
        let temp = TempDir::new().unwrap();
        for i in 0..40 {
            write(&temp.path().join(format!("d{:02}/sub/leaf.bin", i)), i + 1);
            write(&temp.path().join(format!("d{:02}/own.bin", i)), 1);
        }

        let root = analyze(temp.path(), 3).unwrap();
        assert_eq!(root.children.len(), 40);
        assert_eq!(root.size, (1..=40).sum::<usize>() as u64 + 40);
        assert_eq!(root.children[0].name, "d39");
        for child in &root.children {
            assert_eq!(child.children.len(), 1);
            assert_eq!(child.children[0].name, "sub");
            assert_eq!(child.children[0].size + 1, child.size);
            assert!(child.children[0].children.is_empty());
        }
    }

    #[test]
    fn test_missing_dir() {
        let temp = TempDir::new().unwrap();
        assert!(analyze(&temp.path().join("nope"), 1).is_err());
    }
}

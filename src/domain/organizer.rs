//! Rules for sorting loose files into folders

use std::path::Path;
use std::str::FromStr;

/// How files are grouped into destination folders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupBy {
    /// One folder per extension (`pdf/`, `png/`, ...)
    #[default]
    Extension,
    /// One folder per broad category (`images/`, `documents/`, ...)
    Type,
}

impl FromStr for GroupBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "extension" | "ext" => Ok(GroupBy::Extension),
            "type" | "category" => Ok(GroupBy::Type),
            _ => Err(format!(
                "Invalid grouping: '{}'. Valid values are: extension, type",
                s
            )),
        }
    }
}

const CATEGORIES: [(&str, &[&str]); 6] = [
    ("images", &["jpg", "jpeg", "png", "gif", "bmp"]),
    ("documents", &["pdf", "doc", "docx", "txt"]),
    ("videos", &["mp4", "avi", "mkv"]),
    ("music", &["mp3", "wav", "aac"]),
    ("archives", &["zip", "rar", "tar", "gz"]),
    ("code", &["js", "html", "css", "py", "java", "c", "cpp", "ts"]),
];

/// Fallback category for unrecognised extensions
pub const OTHERS: &str = "others";

/// Lowercased extension without the dot, if any
pub fn extension_of(file_name: &str) -> Option<String> {
    Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .filter(|e| !e.is_empty())
        .map(|e| e.to_lowercase())
}

/// Category folder for an extension
pub fn category_for(extension: Option<&str>) -> &'static str {
    let Some(ext) = extension else {
        return OTHERS;
    };
    CATEGORIES
        .iter()
        .find(|(_, exts)| exts.contains(&ext))
        .map(|(name, _)| *name)
        .unwrap_or(OTHERS)
}

/// Destination folder for a file, or `None` when the file stays put
pub fn destination_folder(file_name: &str, group_by: GroupBy) -> Option<String> {
    if file_name.starts_with('.') {
        return None;
    }

    let ext = extension_of(file_name);
    match group_by {
        GroupBy::Extension => ext,
        GroupBy::Type => Some(category_for(ext.as_deref()).to_string()),
    }
}

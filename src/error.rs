//! Error types for toolbelt

use thiserror::Error;

/// Main error type for the toolbelt application
#[derive(Debug, Error)]
pub enum ToolbeltError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Git error: {0}")]
    Git(String),

    #[error("Entropy source error: {0}")]
    Entropy(String),

    #[error("Prompt error: {0}")]
    Prompt(String),
}

impl ToolbeltError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ToolbeltError::InvalidInput(_) | ToolbeltError::UnknownAlgorithm(_) => 2,
            ToolbeltError::NotFound(_) => 3,
            ToolbeltError::Git(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            ToolbeltError::UnknownAlgorithm(name) => {
                format!(
                    "Unknown algorithm: '{}'\n\n\
                    Run 'toolbelt algorithms' to see every sorting and searching algorithm.\n\
                    Names are case-insensitive and accept short forms:\n\
                    • toolbelt sort quick --size 100\n\
                    • toolbelt search binary --target 42\n\
                    • toolbelt sort all",
                    name
                )
            }
            ToolbeltError::InvalidInput(msg) if msg.contains("date") => {
                format!(
                    "Invalid input: {}\n\n\
                    Expected format: YYYY-MM-DD\n\
                    Example: toolbelt calendar view 2025-01-17",
                    msg
                )
            }
            ToolbeltError::InvalidInput(msg) if msg.contains("time") => {
                format!(
                    "Invalid input: {}\n\n\
                    Expected format: HH:MM (24-hour)\n\
                    Example: toolbelt calendar add Standup --date 2025-01-17 --time 09:30",
                    msg
                )
            }
            ToolbeltError::Git(msg) => {
                format!(
                    "Git error: {}\n\n\
                    Suggestions:\n\
                    • Run the command inside a git repository\n\
                    • Check that git is installed and in PATH",
                    msg
                )
            }
            ToolbeltError::Config(msg) if msg.contains("Unknown config key") => {
                format!(
                    "{}\n\n\
                    Example: toolbelt config page_size 25",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using ToolbeltError
pub type Result<T> = std::result::Result<T, ToolbeltError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ToolbeltError::InvalidInput("x".into()).exit_code(), 2);
        assert_eq!(ToolbeltError::UnknownAlgorithm("x".into()).exit_code(), 2);
        assert_eq!(ToolbeltError::NotFound("x".into()).exit_code(), 3);
        assert_eq!(ToolbeltError::Git("x".into()).exit_code(), 4);
        assert_eq!(ToolbeltError::Config("x".into()).exit_code(), 1);
    }

    #[test]
    fn test_unknown_algorithm_suggestion() {
        let err = ToolbeltError::UnknownAlgorithm("bogo".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("'bogo'"));
        assert!(msg.contains("toolbelt algorithms"));
    }

    #[test]
    fn test_date_format_suggestion() {
        let err = ToolbeltError::InvalidInput("Invalid date: 17/01/2025".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_time_format_suggestion() {
        let err = ToolbeltError::InvalidInput("Invalid time: 9am".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("HH:MM"));
    }

    #[test]
    fn test_git_suggestion() {
        let err = ToolbeltError::Git("not a git repository".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("inside a git repository"));
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = ToolbeltError::NotFound("Note #3".to_string());
        assert_eq!(err.display_with_suggestions(), "Not found: Note #3");
    }
}

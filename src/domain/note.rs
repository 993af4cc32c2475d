//! Note records

use crate::error::{Result, ToolbeltError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub title: String,
    pub content: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Note {
    pub fn new(title: &str, content: &str, created_at: DateTime<Utc>) -> Result<Self> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ToolbeltError::InvalidInput(
                "note title cannot be empty".to_string(),
            ));
        }
        Ok(Note {
            title: title.to_string(),
            content: content.to_string(),
            created_at,
        })
    }
}

/// Convert a 1-based display number into a vector index
pub fn index_from_number(number: usize, len: usize, what: &str) -> Result<usize> {
    if number == 0 || number > len {
        return Err(ToolbeltError::NotFound(format!(
            "{} #{} (there {} {})",
            what,
            number,
            if len == 1 { "is" } else { "are" },
            len
        )));
    }
    Ok(number - 1)
}

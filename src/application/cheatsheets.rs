//! Cheatsheet use case, including Markdown import and export

use crate::domain::cheatsheet::Cheatsheets;
use crate::error::Result;
use crate::infrastructure::workspace::{Store, CHEATSHEETS_FILE};
use std::fs;
use std::path::Path;
use tracing::info;

/// Service over `cheatsheets.json`
pub struct CheatsheetService<S: Store> {
    store: S,
}

/// What an import changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub added: usize,
    pub replaced: usize,
}

impl<S: Store> CheatsheetService<S> {
    pub fn new(store: S) -> Self {
        CheatsheetService { store }
    }

    /// The whole collection, topics sorted
    pub fn list(&self) -> Result<Cheatsheets> {
        self.store.load_json(CHEATSHEETS_FILE)
    }

    /// Add or overwrite a topic. Returns true when an existing topic was replaced.
    pub fn add(&self, topic: &str, content: &str) -> Result<bool> {
        let mut sheets = self.list()?;
        let replaced = sheets.upsert(topic, content)?;
        self.store.save_json(CHEATSHEETS_FILE, &sheets)?;
        info!(topic, replaced, "cheatsheet saved");
        Ok(replaced)
    }

    pub fn remove(&self, topic: &str) -> Result<()> {
        let mut sheets = self.list()?;
        sheets.remove(topic)?;
        self.store.save_json(CHEATSHEETS_FILE, &sheets)?;
        info!(topic, "cheatsheet removed");
        Ok(())
    }

    pub fn search(&self, term: &str) -> Result<Vec<(String, String)>> {
        let sheets = self.list()?;
        Ok(sheets
            .search(term)
            .into_iter()
            .map(|(topic, content)| (topic.to_string(), content.to_string()))
            .collect())
    }

    /// Merge topics from a Markdown file; same-named topics are overwritten
    pub fn import(&self, path: &Path) -> Result<ImportSummary> {
        let markdown = fs::read_to_string(path)?;
        let incoming = Cheatsheets::from_markdown(&markdown);

        let mut sheets = self.list()?;
        let mut summary = ImportSummary {
            added: 0,
            replaced: 0,
        };
        for (topic, content) in incoming.topics() {
            if sheets.upsert(topic, content)? {
                summary.replaced += 1;
            } else {
                summary.added += 1;
            }
        }
        self.store.save_json(CHEATSHEETS_FILE, &sheets)?;

        info!(
            path = %path.display(),
            added = summary.added,
            replaced = summary.replaced,
            "cheatsheets imported"
        );
        Ok(summary)
    }

    /// Write every topic to a Markdown file. Returns the number of topics.
    pub fn export(&self, path: &Path) -> Result<usize> {
        let sheets = self.list()?;
        fs::write(path, sheets.to_markdown())?;
        info!(path = %path.display(), topics = sheets.len(), "cheatsheets exported");
        Ok(sheets.len())
    }
}

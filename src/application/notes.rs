//! Note taking use case

use crate::domain::note::{index_from_number, Note};
use crate::error::Result;
use crate::infrastructure::workspace::{Store, NOTES_FILE};
use chrono::Utc;
use tracing::info;

/// Service over `notes.json`
pub struct NotesService<S: Store> {
    store: S,
}

impl<S: Store> NotesService<S> {
    pub fn new(store: S) -> Self {
        NotesService { store }
    }

    fn load(&self) -> Result<Vec<Note>> {
        self.store.load_json(NOTES_FILE)
    }

    /// Append a note stamped with the current time
    pub fn add(&self, title: &str, content: &str) -> Result<Note> {
        let note = Note::new(title, content, Utc::now())?;
        let mut notes = self.load()?;
        notes.push(note.clone());
        self.store.save_json(NOTES_FILE, &notes)?;
        info!(title = %note.title, total = notes.len(), "note added");
        Ok(note)
    }

    /// All notes in insertion order
    pub fn list(&self) -> Result<Vec<Note>> {
        self.load()
    }

    /// The note with the given 1-based number
    pub fn show(&self, number: usize) -> Result<Note> {
        let mut notes = self.load()?;
        let index = index_from_number(number, notes.len(), "Note")?;
        Ok(notes.swap_remove(index))
    }

    pub fn delete(&self, number: usize) -> Result<Note> {
        let mut notes = self.load()?;
        let index = index_from_number(number, notes.len(), "Note")?;
        let removed = notes.remove(index);
        self.store.save_json(NOTES_FILE, &notes)?;
        info!(title = %removed.title, "note deleted");
        Ok(removed)
    }
}

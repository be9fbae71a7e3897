//! Note repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide date-keyed note storage with load and upsert semantics.
//! - Keep the storage backend swappable behind `NoteRepository`.
//!
//! # Invariants
//! - Keys are opaque strings; no date validation happens here.
//! - `upsert_note` overwrites any prior value; there is no delete.
//! - Every operation is total. Lock poisoning is recovered, never surfaced.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

/// Date key of one note, normally `YYYY-MM-DD`.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteKey = String;

/// Repository interface for date-keyed notes.
///
/// Methods take `&self` so one repository can be shared by any number of
/// note screens through `Arc`.
pub trait NoteRepository: Send + Sync {
    /// Gets note text by date key, `None` when never saved.
    fn get_note(&self, date: &str) -> Option<String>;
    /// Inserts or replaces note text for the date key.
    fn upsert_note(&self, date: &str, text: &str);
    /// Returns saved date keys sorted ascending.
    fn note_dates(&self) -> Vec<NoteKey>;
    /// Returns number of saved notes.
    fn note_count(&self) -> usize;
}

/// Process-lifetime note storage. Contents are lost on drop.
#[derive(Debug, Default)]
pub struct InMemoryNoteRepository {
    notes: RwLock<BTreeMap<NoteKey, String>>,
}

impl InMemoryNoteRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NoteRepository for InMemoryNoteRepository {
    fn get_note(&self, date: &str) -> Option<String> {
        let notes = self.notes.read().unwrap_or_else(PoisonError::into_inner);
        notes.get(date).cloned()
    }

    fn upsert_note(&self, date: &str, text: &str) {
        let mut notes = self.notes.write().unwrap_or_else(PoisonError::into_inner);
        notes.insert(date.to_string(), text.to_string());
    }

    fn note_dates(&self) -> Vec<NoteKey> {
        let notes = self.notes.read().unwrap_or_else(PoisonError::into_inner);
        notes.keys().cloned().collect()
    }

    fn note_count(&self) -> usize {
        let notes = self.notes.read().unwrap_or_else(PoisonError::into_inner);
        notes.len()
    }
}

//! Note use-case service.
//!
//! # Responsibility
//! - Provide load/save APIs keyed by date.
//! - Publish the most recently loaded or saved text as an observable value.
//!
//! # Invariants
//! - `load` of an unknown key yields an empty string, never an error.
//! - `save` uses full replacement semantics.
//! - The observable is updated before `load`/`save` return, under the same
//!   lock as the repository access.
//! - Note text is never written to logs; only key and length are.

use crate::observable::{Observable, Subscription};
use crate::repo::note_repo::{NoteKey, NoteRepository};
use log::debug;

/// Note service facade over repository implementations.
///
/// Shared by reference (`Arc<NoteService<_>>`) between every screen that
/// reads or writes notes.
pub struct NoteService<R: NoteRepository> {
    repo: R,
    current_text: Observable<String>,
}

impl<R: NoteRepository> NoteService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            current_text: Observable::new(String::new()),
        }
    }

    /// Loads the note for `date` and publishes it as the current text.
    pub fn load(&self, date: &str) -> String {
        let text = self.current_text.update(|current| {
            *current = self.repo.get_note(date).unwrap_or_default();
            current.clone()
        });
        debug!(
            "event=note_load module=notes status=ok date={} found={} len={}",
            date,
            !text.is_empty(),
            text.chars().count()
        );
        text
    }

    /// Upserts `text` under `date` and publishes it as the current text.
    ///
    /// The write and the publish happen under the observable's lock, so
    /// concurrent saves publish in the same order they hit the repository.
    pub fn save(&self, date: &str, text: impl Into<String>) {
        let text = text.into();
        let len = text.chars().count();
        self.current_text.update(|current| {
            self.repo.upsert_note(date, text.as_str());
            *current = text;
        });
        debug!(
            "event=note_save module=notes status=ok date={} len={}",
            date, len
        );
    }

    /// Stored text for `date`, without publishing it.
    pub fn text_for(&self, date: &str) -> String {
        self.repo.get_note(date).unwrap_or_default()
    }

    /// Returns the most recently loaded or saved text.
    pub fn current_text(&self) -> String {
        self.current_text.get()
    }

    /// Subscribes to current-text changes.
    pub fn subscribe(&self) -> Subscription<String> {
        self.current_text.subscribe()
    }

    /// Returns every date key with a saved note, sorted ascending.
    pub fn note_dates(&self) -> Vec<NoteKey> {
        self.repo.note_dates()
    }

    pub fn has_note(&self, date: &str) -> bool {
        self.repo.get_note(date).is_some()
    }
}

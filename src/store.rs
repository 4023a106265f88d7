//! Application state container with write-through persistence.
//!
//! [`DashboardStore`] owns the three persisted slices (theme flag, tasks,
//! notes) and the storage backend. It is created once at startup and passed
//! by reference to whoever needs to read or mutate state. Each mutation
//! writes the full new value of the slice it touched before returning;
//! slices are written independently of one another.

use crate::constants::{STORAGE_KEY_DARK_MODE, STORAGE_KEY_NOTES, STORAGE_KEY_TASKS};
use crate::entities::{Note, Task};
use crate::managers::{notes, tasks};
use crate::storage::{load_slice, save_slice, KeyValueStore, LoadWarning, StorageError};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Result of applying a mutation to the store
#[derive(Debug)]
pub enum Commit {
    /// Nothing changed (blank input or unknown id)
    Unchanged,
    /// State changed and was persisted
    Saved,
    /// State changed in memory but persisting it failed
    SaveFailed(StorageError),
}

impl Commit {
    /// Whether the in-memory state changed
    pub fn changed(&self) -> bool {
        !matches!(self, Commit::Unchanged)
    }
}

pub struct DashboardStore {
    backend: Box<dyn KeyValueStore>,
    dark_mode: bool,
    tasks: Vec<Task>,
    notes: Vec<Note>,
    load_warnings: Vec<LoadWarning>,
}

impl DashboardStore {
    /// Hydrate every slice from `backend`, falling back to defaults for
    /// missing or malformed values
    pub fn load(backend: Box<dyn KeyValueStore>) -> Self {
        let mut load_warnings = Vec::new();

        let (dark_mode, warning) = load_slice::<bool, _>(backend.as_ref(), STORAGE_KEY_DARK_MODE);
        load_warnings.extend(warning);
        let (tasks, warning) = load_slice::<Vec<Task>, _>(backend.as_ref(), STORAGE_KEY_TASKS);
        load_warnings.extend(warning);
        let (notes, warning) = load_slice::<Vec<Note>, _>(backend.as_ref(), STORAGE_KEY_NOTES);
        load_warnings.extend(warning);

        log::info!(
            "Store: loaded dark_mode={}, {} tasks, {} notes ({} warnings)",
            dark_mode,
            tasks.len(),
            notes.len(),
            load_warnings.len()
        );

        Self {
            backend,
            dark_mode,
            tasks,
            notes,
            load_warnings,
        }
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Slices that were reset to defaults during [`DashboardStore::load`]
    pub fn load_warnings(&self) -> &[LoadWarning] {
        &self.load_warnings
    }

    pub fn backend(&self) -> &dyn KeyValueStore {
        self.backend.as_ref()
    }

    pub fn toggle_theme(&mut self) -> Commit {
        self.dark_mode = !self.dark_mode;
        log::info!("Theme: dark mode {}", if self.dark_mode { "on" } else { "off" });
        let dark_mode = self.dark_mode;
        self.persist(STORAGE_KEY_DARK_MODE, &dark_mode)
    }

    pub fn add_task(&mut self, title: &str) -> Commit {
        match tasks::add_task(&self.tasks, title) {
            Some(next) => {
                log::info!("Task: added '{}'", title);
                self.commit_tasks(next)
            }
            None => {
                log::debug!("Task: ignoring blank title");
                Commit::Unchanged
            }
        }
    }

    pub fn toggle_task(&mut self, id: &str) -> Commit {
        match tasks::toggle_task(&self.tasks, id) {
            Some(next) => {
                log::info!("Task: toggled {}", id);
                self.commit_tasks(next)
            }
            None => {
                log::debug!("Task: cannot toggle unknown id {}", id);
                Commit::Unchanged
            }
        }
    }

    pub fn delete_task(&mut self, id: &str) -> Commit {
        match tasks::delete_task(&self.tasks, id) {
            Some(next) => {
                log::info!("Task: deleted {}", id);
                self.commit_tasks(next)
            }
            None => {
                log::debug!("Task: cannot delete unknown id {}", id);
                Commit::Unchanged
            }
        }
    }

    pub fn add_note(&mut self, content: &str) -> Commit {
        self.add_note_at(content, Utc::now())
    }

    /// Add a note with an explicit creation time
    pub fn add_note_at(&mut self, content: &str, now: DateTime<Utc>) -> Commit {
        match notes::add_note(&self.notes, content, now) {
            Some(next) => {
                log::info!("Note: added ({} chars)", content.chars().count());
                self.commit_notes(next)
            }
            None => {
                log::debug!("Note: ignoring blank content");
                Commit::Unchanged
            }
        }
    }

    pub fn delete_note(&mut self, id: &str) -> Commit {
        match notes::delete_note(&self.notes, id) {
            Some(next) => {
                log::info!("Note: deleted {}", id);
                self.commit_notes(next)
            }
            None => {
                log::debug!("Note: cannot delete unknown id {}", id);
                Commit::Unchanged
            }
        }
    }

    fn commit_tasks(&mut self, next: Vec<Task>) -> Commit {
        self.tasks = next;
        let backend = self.backend.as_mut();
        Self::write(backend, STORAGE_KEY_TASKS, &self.tasks)
    }

    fn commit_notes(&mut self, next: Vec<Note>) -> Commit {
        self.notes = next;
        let backend = self.backend.as_mut();
        Self::write(backend, STORAGE_KEY_NOTES, &self.notes)
    }

    fn persist<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Commit {
        Self::write(self.backend.as_mut(), key, value)
    }

    fn write<T: Serialize + ?Sized>(backend: &mut dyn KeyValueStore, key: &str, value: &T) -> Commit {
        match save_slice(backend, key, value) {
            Ok(()) => Commit::Saved,
            Err(e) => {
                log::error!("Storage: failed to persist '{}': {}", key, e);
                Commit::SaveFailed(e)
            }
        }
    }
}

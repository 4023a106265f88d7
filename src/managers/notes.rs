use crate::entities::Note;
use chrono::{DateTime, Utc};

/// Prepend a new note stamped with `now`. Blank content is rejected.
pub fn add_note(notes: &[Note], content: &str, now: DateTime<Utc>) -> Option<Vec<Note>> {
    if content.trim().is_empty() {
        return None;
    }
    let mut next = Vec::with_capacity(notes.len() + 1);
    next.push(Note::new(content, now));
    next.extend_from_slice(notes);
    Some(next)
}

/// Remove the note with `id`
pub fn delete_note(notes: &[Note], id: &str) -> Option<Vec<Note>> {
    let position = notes.iter().position(|note| note.id == id)?;
    let mut next = notes.to_vec();
    next.remove(position);
    Some(next)
}

//! List operations for tasks and notes.
//!
//! Each operation takes the current collection and returns `Some(new
//! collection)` when something changed, or `None` for a no-op (blank input,
//! unknown id). The input slice is never mutated in place.

pub mod notes;
pub mod tasks;

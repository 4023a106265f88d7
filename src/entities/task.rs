use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A to-do item. Only `completed` ever changes after creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

impl Model {
    /// Create an open task with a fresh random id
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            completed: false,
        }
    }

    /// Copy of this task with the completion flag flipped
    #[must_use]
    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }
}

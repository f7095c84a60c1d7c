use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: String,
    pub title: String,
    pub created_at: DateTime<Local>,
}

impl TodoItem {
    pub fn new(id: String, title: String, created_at: DateTime<Local>) -> Self {
        Self {
            id,
            title,
            created_at,
        }
    }
}

/// The queue, oldest item first. Indexes are storage positions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoData {
    #[serde(default)]
    pub items: Vec<TodoItem>,
}

impl TodoData {
    /// The head of the queue.
    pub fn next(&self) -> Option<&TodoItem> {
        self.items.first()
    }
}

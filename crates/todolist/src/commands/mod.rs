use crate::model::TodoItem;

pub use daybook_core::message::{CmdMessage, MessageLevel};

pub mod add;
pub mod done;
pub mod edit;
pub mod list;
pub mod next;

/// An item paired with its queue position, as the user addresses it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedItem {
    pub index: usize,
    pub item: TodoItem,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_items: Vec<TodoItem>,
    pub listed_items: Vec<IndexedItem>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected(mut self, item: TodoItem) -> Self {
        self.affected_items.push(item);
        self
    }

    pub fn message_texts(&self) -> Vec<&str> {
        self.messages.iter().map(|m| m.content.as_str()).collect()
    }
}

pub(crate) const NO_ITEMS: &str = "No items";

pub(crate) fn clean_title(title: &str) -> crate::error::Result<String> {
    let title = title.trim();
    if title.is_empty() {
        return Err(crate::error::TodoError::EmptyTitle);
    }
    Ok(title.to_string())
}

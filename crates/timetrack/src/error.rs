use daybook_core::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimetrackError {
    #[error("invalid index: {index} (valid range: 0-{max})")]
    InvalidIndex { index: usize, max: usize },

    #[error("invalid index: {0} (no entries)")]
    NoEntries(usize),

    #[error("title cannot be empty")]
    EmptyTitle,

    #[error("note cannot be empty")]
    EmptyNote,

    #[error("nothing to edit: specify a new title or a start offset")]
    NothingToEdit,

    #[error("adjusted start time would be after end time")]
    StartAfterEnd,

    #[error("start offset out of range: {0} minutes")]
    StartOutOfRange(i64),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, TimetrackError>;

use daybook_core::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TodoError {
    #[error("invalid index: {index} (valid range: 0-{max})")]
    InvalidIndex { index: usize, max: usize },

    #[error("invalid index: {0} (no items)")]
    Empty(usize),

    #[error("title cannot be empty")]
    EmptyTitle,

    #[error("no items")]
    NoItems,

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TodoError>;

/// Checks a storage index against the queue length.
pub(crate) fn check_index(len: usize, index: usize) -> Result<usize> {
    match len {
        0 => Err(TodoError::Empty(index)),
        _ if index >= len => Err(TodoError::InvalidIndex {
            index,
            max: len - 1,
        }),
        _ => Ok(index),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_bounds() {
        assert_eq!(check_index(3, 2).unwrap(), 2);
        assert_eq!(
            check_index(3, 3).unwrap_err().to_string(),
            "invalid index: 3 (valid range: 0-2)"
        );
        assert_eq!(
            check_index(0, 0).unwrap_err().to_string(),
            "invalid index: 0 (no items)"
        );
    }
}

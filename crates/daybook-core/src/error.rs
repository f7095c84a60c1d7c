use std::path::PathBuf;
use thiserror::Error;

/// Low-level failure reading or writing a JSON document.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}: {source}")]
    Serialization {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to load data: {0}")]
    Load(#[source] DocumentError),

    #[error("failed to save data: {0}")]
    Save(#[source] DocumentError),

    #[error("failed to load config: {0}")]
    Config(#[source] DocumentError),

    #[error("could not determine the home directory")]
    NoHomeDir,
}

pub type Result<T> = std::result::Result<T, StoreError>;

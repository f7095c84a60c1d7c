use super::DocumentStore;
use crate::error::{DocumentError, Result, StoreError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A document persisted as a single JSON file.
pub struct JsonFileStore<D> {
    path: PathBuf,
    _doc: PhantomData<fn() -> D>,
}

impl<D> JsonFileStore<D> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _doc: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> std::result::Result<(), DocumentError> {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() && !dir.exists() => {
                fs::create_dir_all(dir).map_err(|source| DocumentError::Io {
                    path: dir.to_path_buf(),
                    source,
                })
            }
            _ => Ok(()),
        }
    }
}

/// Reads `path` as JSON. `Ok(None)` means "nothing there": the file is missing
/// or holds only whitespace.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> std::result::Result<Option<T>, DocumentError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(DocumentError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    if content.trim().is_empty() {
        return Ok(None);
    }

    serde_json::from_str(&content)
        .map(Some)
        .map_err(|source| DocumentError::Serialization {
            path: path.to_path_buf(),
            source,
        })
}

impl<D> DocumentStore<D> for JsonFileStore<D>
where
    D: Serialize + DeserializeOwned + Default,
{
    fn load(&self) -> Result<D> {
        debug!(path = %self.path.display(), "loading document");
        let doc = read_json(&self.path).map_err(StoreError::Load)?;
        Ok(doc.unwrap_or_default())
    }

    fn save(&mut self, doc: &D) -> Result<()> {
        debug!(path = %self.path.display(), "saving document");
        self.ensure_parent_dir().map_err(StoreError::Save)?;

        let content = serde_json::to_string_pretty(doc).map_err(|source| {
            StoreError::Save(DocumentError::Serialization {
                path: self.path.clone(),
                source,
            })
        })?;
        fs::write(&self.path, content).map_err(|source| {
            StoreError::Save(DocumentError::Io {
                path: self.path.clone(),
                source,
            })
        })
    }
}

use crate::error::{Result, StoreError};
use crate::store::fs::read_json;
use directories::{BaseDirs, ProjectDirs};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_FILENAME: &str = "config.json";

/// Where one tool keeps its data and configuration.
#[derive(Debug, Clone, Copy)]
pub struct AppProfile {
    /// Name used for the config directory, e.g. `timetrack`.
    pub name: &'static str,
    /// File name of the data document inside the home directory.
    pub data_file_name: &'static str,
    /// Environment variable that overrides the config directory.
    pub config_dir_env: &'static str,
}

impl AppProfile {
    /// The config directory: `$<config_dir_env>` if set, otherwise the
    /// platform config dir for this app.
    pub fn config_dir(&self) -> Option<PathBuf> {
        if let Some(dir) = std::env::var_os(self.config_dir_env) {
            if !dir.is_empty() {
                return Some(PathBuf::from(dir));
            }
        }
        ProjectDirs::from("", "", self.name).map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// `~/<data_file_name>`.
    pub fn default_data_file(&self) -> Result<PathBuf> {
        home_dir().map(|home| home.join(self.data_file_name))
    }

    /// Pick the data file: an explicit path (CLI flag or env) wins over the
    /// configured one, which wins over the default in the home directory.
    pub fn resolve_data_file(
        &self,
        explicit: Option<PathBuf>,
        configured: Option<PathBuf>,
    ) -> Result<PathBuf> {
        let path = match explicit.or(configured) {
            Some(path) => expand_home(&path)?,
            None => self.default_data_file()?,
        };
        debug!(app = self.name, path = %path.display(), "resolved data file");
        Ok(path)
    }

    /// Load this app's config from its config directory, or defaults when
    /// there is no directory or no config file.
    pub fn load_config<C: DeserializeOwned + Default>(&self) -> Result<C> {
        match self.config_dir() {
            Some(dir) => load_config(&dir),
            None => Ok(C::default()),
        }
    }
}

/// Load `config.json` from `config_dir`, returning defaults if it is missing.
pub fn load_config<C: DeserializeOwned + Default>(config_dir: &Path) -> Result<C> {
    let path = config_dir.join(CONFIG_FILENAME);
    let config = read_json(&path).map_err(StoreError::Config)?;
    Ok(config.unwrap_or_default())
}

fn home_dir() -> Result<PathBuf> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or(StoreError::NoHomeDir)
}

/// Expands a leading `~` to the home directory.
fn expand_home(path: &Path) -> Result<PathBuf> {
    match path.strip_prefix("~") {
        Ok(rest) => home_dir().map(|home| home.join(rest)),
        Err(_) => Ok(path.to_path_buf()),
    }
}

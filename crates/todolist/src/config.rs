use daybook_core::config::AppProfile;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const PROFILE: AppProfile = AppProfile {
    name: "todo",
    data_file_name: ".todo.json",
    config_dir_env: "TODO_CONFIG_DIR",
};

/// Optional settings, read from `<config dir>/todo/config.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoConfig {
    /// Where the queue lives. Defaults to `~/.todo.json`.
    #[serde(default)]
    pub data_file: Option<PathBuf>,
}

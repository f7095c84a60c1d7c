use crate::commands::list::DEFAULT_LIMIT;
use daybook_core::config::AppProfile;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const PROFILE: AppProfile = AppProfile {
    name: "timetrack",
    data_file_name: ".timetrack.json",
    config_dir_env: "TIMETRACK_CONFIG_DIR",
};

/// Optional settings, read from `<config dir>/timetrack/config.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetrackConfig {
    /// Where the entries live. Defaults to `~/.timetrack.json`.
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    /// Rows shown by `list` when `-n` is not given.
    #[serde(default = "default_list_limit")]
    pub list_limit: usize,
}

fn default_list_limit() -> usize {
    DEFAULT_LIMIT
}

impl Default for TimetrackConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            list_limit: DEFAULT_LIMIT,
        }
    }
}

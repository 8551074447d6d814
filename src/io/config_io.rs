use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::io::tasks_io::{PersistError, atomic_write};

/// UI preferences persisted separately from the board.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(default)]
    pub vertical: bool,
}

/// Path of the config file inside a data directory.
pub fn config_path(data_dir: &Path) -> PathBuf {
    data_dir.join("config.json")
}

/// Load the layout preference. A missing, unreadable, or malformed config
/// falls back to the horizontal default rather than failing startup.
pub fn load_layout(data_dir: &Path) -> bool {
    let path = config_path(data_dir);
    let Ok(text) = fs::read_to_string(&path) else {
        return false;
    };
    serde_json::from_str::<LayoutConfig>(&text)
        .map(|c| c.vertical)
        .unwrap_or(false)
}

/// Persist the layout preference.
pub fn save_layout(data_dir: &Path, vertical: bool) -> Result<(), PersistError> {
    fs::create_dir_all(data_dir).map_err(|e| PersistError::Write {
        path: data_dir.to_path_buf(),
        source: e,
    })?;

    let mut content = serde_json::to_string_pretty(&LayoutConfig { vertical })?;
    content.push('\n');

    let path = config_path(data_dir);
    atomic_write(&path, content.as_bytes()).map_err(|e| PersistError::Write { path, source: e })
}

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::model::Board;

/// Error type for board persistence
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("could not determine home directory")]
    NoHomeDir,
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    Decode {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("could not serialize board: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Default data directory: `~/.kanso`.
pub fn default_data_dir() -> Result<PathBuf, PersistError> {
    dirs::home_dir()
        .map(|home| home.join(".kanso"))
        .ok_or(PersistError::NoHomeDir)
}

/// Path of the board file inside a data directory.
pub fn tasks_path(data_dir: &Path) -> PathBuf {
    data_dir.join("tasks.json")
}

/// Write `content` to `path` atomically using a temp file + rename.
pub fn atomic_write(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Load the board from `data_dir`.
///
/// A missing file yields an empty board; a file that exists but cannot be
/// read or parsed is an error, so a truncated or corrupt board is never
/// silently replaced.
pub fn load_tasks(data_dir: &Path) -> Result<Board, PersistError> {
    let path = tasks_path(data_dir);
    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Board::default()),
        Err(e) => return Err(PersistError::Read { path, source: e }),
    };
    serde_json::from_str(&text).map_err(|e| PersistError::Decode { path, source: e })
}

/// Write the whole board to `data_dir`, creating the directory if needed.
pub fn save_tasks(data_dir: &Path, board: &Board) -> Result<(), PersistError> {
    fs::create_dir_all(data_dir).map_err(|e| PersistError::Write {
        path: data_dir.to_path_buf(),
        source: e,
    })?;

    let mut content = serde_json::to_string_pretty(board)?;
    content.push('\n');

    let path = tasks_path(data_dir);
    atomic_write(&path, content.as_bytes()).map_err(|e| PersistError::Write { path, source: e })
}

//! `store` — persistence of in-progress games behind a small key-value interface.
//!
//! The engine itself holds no ambient state: whoever drives a [`Game`](crate::game::Game)
//! passes a [`GameStore`] in explicitly. Each key holds one [`SavedGame`], stored as JSON
//! so the format matches what a browser client keeps in local storage.
//!
//! - [`MemoryStore`] works everywhere, including WASM.
//! - [`FileStore`] is **native-only**: one `<key>.json` file per key in a directory.

use std::collections::HashMap;
use std::io;

/// Key used when the caller doesn't scope saves per puzzle.
pub const DEFAULT_STORE_KEY: &str = "nerditt-state";

/// Snapshot of a game, enough to resume it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SavedGame {
    pub solution: String,
    pub guesses: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("malformed saved game: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid store key \"{key}\"")]
    InvalidKey { key: String },
}

impl StoreError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::Io(_) => "T001",
            StoreError::Json(_) => "T002",
            StoreError::InvalidKey { .. } => "T003",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            StoreError::Io(_) => "Store I/O failure",
            StoreError::Json(_) => "Saved game could not be read",
            StoreError::InvalidKey { .. } => "Unusable store key",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            StoreError::Io(_) => "Reading or writing the saved game failed at the operating-system level.",
            StoreError::Json(_) => "A saved game exists under this key but is not valid JSON of the expected shape.",
            StoreError::InvalidKey { .. } => "File-backed stores use the key as a file name, so it must be non-empty and made of letters, digits, '-', '_' or ':'.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            StoreError::Io(_) => Some("Check that the state directory exists and is writable"),
            StoreError::Json(_) => Some("Delete the saved game file to start over"),
            StoreError::InvalidKey { .. } => Some("Example key: 'puzzle-42'"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        crate::errors::format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Load/save by key.
pub trait GameStore {
    /// `Ok(None)` when nothing was saved under `key`.
    fn load(&self, key: &str) -> Result<Option<SavedGame>, StoreError>;

    fn save(&mut self, key: &str, saved: &SavedGame) -> Result<(), StoreError>;
}

/// In-memory store; values are kept serialized, as a browser would keep them.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a raw value under `key`, bypassing serialization.
    pub fn insert_raw(&mut self, key: &str, raw: impl Into<String>) {
        self.entries.insert(key.to_string(), raw.into());
    }
}

impl GameStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<SavedGame>, StoreError> {
        self.entries
            .get(key)
            .map(|raw| serde_json::from_str(raw))
            .transpose()
            .map_err(StoreError::from)
    }

    fn save(&mut self, key: &str, saved: &SavedGame) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), serde_json::to_string(saved)?);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store {
    use super::{GameStore, SavedGame, StoreError};
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    /// Directory-backed store: `<dir>/<key>.json`.
    #[derive(Debug, Clone)]
    pub struct FileStore {
        dir: PathBuf,
    }

    impl FileStore {
        /// Open (creating if needed) a store rooted at `dir`.
        ///
        /// # Errors
        /// `StoreError::Io` if the directory can't be created.
        pub fn open(dir: impl AsRef<Path>) -> Result<Self, StoreError> {
            let dir = dir.as_ref().to_path_buf();
            fs::create_dir_all(&dir)?;
            Ok(FileStore { dir })
        }

        fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
            let usable = !key.is_empty()
                && key.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':'));
            if !usable {
                return Err(StoreError::InvalidKey { key: key.to_string() });
            }
            Ok(self.dir.join(format!("{}.json", file_stem(key))))
        }
    }

    /// ':' is not portable in file names. `_` escapes it as `_c` and itself
    /// as `__`, so distinct keys never share a file.
    fn file_stem(key: &str) -> String {
        let mut stem = String::with_capacity(key.len());
        for c in key.chars() {
            match c {
                '_' => stem.push_str("__"),
                ':' => stem.push_str("_c"),
                _ => stem.push(c),
            }
        }
        stem
    }

    impl GameStore for FileStore {
        fn load(&self, key: &str) -> Result<Option<SavedGame>, StoreError> {
            let path = self.path_for(key)?;
            match fs::read_to_string(&path) {
                Ok(raw) => Ok(Some(serde_json::from_str(&raw)?)),
                Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
                Err(e) => Err(e.into()),
            }
        }

        fn save(&mut self, key: &str, saved: &SavedGame) -> Result<(), StoreError> {
            let path = self.path_for(key)?;
            fs::write(&path, serde_json::to_string_pretty(saved)?)?;
            log::debug!("saved game to {}", path.display());
            Ok(())
        }
    }
}

//! Storage backends - the durable medium under the local store.
//!
//! A backend is a flat key-value surface: one key per collection, value is
//! the serialized JSON array. Reads absorb medium errors (a collection
//! that cannot be read is treated as absent); writes surface them.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Durable key-value medium for serialized collections.
pub trait StorageBackend: Send + Sync {
    /// Load the raw value for a key, or `None` if absent/unreadable.
    fn load(&self, key: &str) -> Option<String>;

    /// Persist the raw value for a key, replacing any prior value.
    ///
    /// Must be all-or-nothing: a rejected write leaves the prior value
    /// intact.
    fn save(&self, key: &str, value: &str) -> io::Result<()>;
}

/// In-memory backend, used by tests and as a scratch store.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    /// Create an empty in-memory backend.
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn load(&self, key: &str) -> Option<String> {
        // A poisoned lock still holds valid data; degrade instead of
        // propagating the panic.
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(key)
            .cloned()
    }

    fn save(&self, key: &str, value: &str) -> io::Result<()> {
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-per-key backend: `<dir>/<key>.json`.
#[derive(Debug)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Open (creating if needed) a backend rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Directory this backend persists into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StorageBackend for FileBackend {
    fn load(&self, key: &str) -> Option<String> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(value) => Some(value),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to read collection file, treating as absent");
                None
            }
        }
    }

    fn save(&self, key: &str, value: &str) -> io::Result<()> {
        // Write to a temp file and rename so a failed write never
        // clobbers the previous value.
        let path = self.path_for(key);
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        std::fs::write(&tmp, value)?;
        std::fs::rename(&tmp, &path)
    }
}

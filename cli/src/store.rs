//! Session persistence for the command line.
//!
//! DESIGN
//! ======
//! A flat JSON object on disk, loaded once at startup and rewritten on every
//! change. Writes go to a sibling temp file and are renamed into place so an
//! interrupted command never leaves a half-written session behind.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use api_client::storage::KeyValueStore;

const SESSION_DIR: &str = ".huellitas";
const SESSION_FILE: &str = "session.json";

/// Default location: `$HOME/.huellitas/session.json`, or the working
/// directory when no home is set.
pub fn default_session_path() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_default()
        .join(SESSION_DIR)
        .join(SESSION_FILE)
}

#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// Load `path`, starting empty when it does not exist or is unreadable
    /// as a session file.
    ///
    /// # Errors
    ///
    /// Returns I/O errors other than "not found".
    pub fn open(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "ignoring corrupt session file");
                BTreeMap::new()
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e),
        };
        Ok(Self { path, entries: Mutex::new(entries) })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, entries: &BTreeMap<String, String>) {
        if let Err(e) = write_atomic(&self.path, entries) {
            tracing::warn!(path = %self.path.display(), error = %e, "session file write failed");
        }
    }
}

fn write_atomic(path: &Path, entries: &BTreeMap<String, String>) -> io::Result<()> {
    if entries.is_empty() {
        return match std::fs::remove_file(path) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        };
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let raw = serde_json::to_string_pretty(entries).map_err(io::Error::other)?;
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, raw)?;
    std::fs::rename(&tmp, path)
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let Ok(mut entries) = self.entries.lock() else {
            return;
        };
        entries.insert(key.to_owned(), value.to_owned());
        self.persist(&entries);
    }

    fn remove(&self, key: &str) {
        let Ok(mut entries) = self.entries.lock() else {
            return;
        };
        if entries.remove(key).is_some() {
            self.persist(&entries);
        }
    }
}

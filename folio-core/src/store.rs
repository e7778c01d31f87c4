//! String-keyed persistence for user-added projects.
//!
//! The catalog only ever needs "read one value at startup" and "overwrite
//! that value wholesale", so the store is a plain key/value surface.

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::{CatalogError, Result};

/// Fixed key under which user-added projects are stored.
pub const STORAGE_KEY: &str = "portfolioProjects";

pub trait KeyValueStore {
    /// `Ok(None)` when nothing has been stored under `key` yet.
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Directory-backed store: one `<key>.json` file per key.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&path)?))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|err| {
            CatalogError::persistence_write(
                key,
                format!("failed to create store directory {}: {err}", self.dir.display()),
            )
        })?;

        let path = self.path_for(key);
        let tmp_path = path.with_extension("json.tmp");
        write_replacing(&tmp_path, &path, value).map_err(|err| {
            let _ = fs::remove_file(&tmp_path);
            CatalogError::persistence_write(
                key,
                format!("failed to replace {}: {err}", path.display()),
            )
        })
    }
}

/// Write `value` to `tmp_path`, flush it to disk, then move it over `path`.
fn write_replacing(tmp_path: &Path, path: &Path, value: &str) -> io::Result<()> {
    let mut file = File::create(tmp_path)?;
    file.write_all(value.as_bytes())?;
    file.sync_all()?;
    drop(file);
    fs::rename(tmp_path, path)
}

/// In-process store for tests and `--ephemeral` runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with one value.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.into(), value.into());
        Self {
            entries,
            read_only: false,
        }
    }

    /// Every `set` fails; reads still work.
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.read_only {
            return Err(CatalogError::persistence_write(key, "store is read-only"));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

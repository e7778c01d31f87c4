use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};
use crate::filters::SortKey;
use crate::store::STORAGE_KEY;

pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Resolved folio configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolioConfig {
    /// Directory holding the persisted key/value files.
    pub store_dir: PathBuf,
    /// JSON seed file; the builtin project list is used when unset.
    pub seed_file: Option<PathBuf>,
    pub default_sort: SortKey,
    pub storage_key: String,
    pub page_size: usize,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            store_dir: folio_home().join("store"),
            seed_file: None,
            default_sort: SortKey::Recent,
            storage_key: STORAGE_KEY.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// On-disk shape of `config.toml`; every key is optional.
#[derive(Debug, Default, Serialize, Deserialize)]
struct RawConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    store_dir: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    seed_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    default_sort: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    storage_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    page_size: Option<usize>,
}

impl FolioConfig {
    /// `~/.folio/config.toml`
    pub fn config_path() -> PathBuf {
        folio_home().join("config.toml")
    }

    /// Load from `path` (or the default location). A missing file yields
    /// defaults; a present but malformed one is an error. `FOLIO_STORE_DIR`
    /// and `FOLIO_SEED_FILE` override the file.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_path);

        let raw = if path.exists() {
            let content = fs::read_to_string(&path)
                .map_err(|err| CatalogError::config(&path, err.to_string()))?;
            toml::from_str::<RawConfig>(&content)
                .map_err(|err| CatalogError::config(&path, format!("invalid TOML: {err}")))?
        } else {
            RawConfig::default()
        };

        let mut config = Self::resolve(raw, &path)?;
        config.apply_env();
        Ok(config)
    }

    fn resolve(raw: RawConfig, path: &Path) -> Result<Self> {
        let defaults = Self::default();

        let default_sort = match raw.default_sort {
            Some(key) => key
                .parse()
                .map_err(|err: CatalogError| CatalogError::config(path, err.to_string()))?,
            None => defaults.default_sort,
        };

        let page_size = match raw.page_size {
            Some(0) => return Err(CatalogError::config(path, "page_size must be at least 1")),
            Some(size) => size,
            None => defaults.page_size,
        };

        Ok(Self {
            store_dir: raw
                .store_dir
                .map(|dir| expand_home(&dir))
                .unwrap_or(defaults.store_dir),
            seed_file: raw.seed_file.map(|file| expand_home(&file)),
            default_sort,
            storage_key: raw
                .storage_key
                .filter(|key| !key.trim().is_empty())
                .unwrap_or(defaults.storage_key),
            page_size,
        })
    }

    fn apply_env(&mut self) {
        if let Ok(dir) = env::var("FOLIO_STORE_DIR") {
            if !dir.is_empty() {
                self.store_dir = expand_home(&dir);
            }
        }
        if let Ok(file) = env::var("FOLIO_SEED_FILE") {
            if !file.is_empty() {
                self.seed_file = Some(expand_home(&file));
            }
        }
    }

    /// Render back to TOML for `folio config show`.
    pub fn to_toml(&self) -> Result<String> {
        let raw = RawConfig {
            store_dir: Some(self.store_dir.display().to_string()),
            seed_file: self.seed_file.as_ref().map(|p| p.display().to_string()),
            default_sort: Some(self.default_sort.to_string()),
            storage_key: Some(self.storage_key.clone()),
            page_size: Some(self.page_size),
        };
        toml::to_string_pretty(&raw)
            .map_err(|err| CatalogError::config(Self::config_path(), err.to_string()))
    }
}

fn folio_home() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".folio")
}

/// Expand a leading `~` or `${HOME}`.
fn expand_home(input: &str) -> PathBuf {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    for prefix in ["${HOME}", "~"] {
        if let Some(rest) = input.strip_prefix(prefix) {
            if rest.is_empty() {
                return home;
            }
            if let Some(rest) = rest.strip_prefix('/') {
                return home.join(rest);
            }
        }
    }
    PathBuf::from(input)
}

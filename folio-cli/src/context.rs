//! Builds the one `ProjectCatalog` an invocation works against.

use anyhow::{Context, Result};
use folio_core::{
    BuiltinSeed, FileSeed, FileStore, FolioConfig, KeyValueStore, MemoryStore, ProjectCatalog,
    SeedSource,
};
use tracing::debug;

use crate::GlobalArgs;

/// Config file merged with command-line overrides.
pub fn load_config(global: &GlobalArgs) -> Result<FolioConfig> {
    let mut config = FolioConfig::load(global.config.as_deref())
        .context("failed to load configuration")?;

    if let Some(dir) = &global.store_dir {
        config.store_dir = dir.clone();
    }
    if let Some(seed) = &global.seed {
        config.seed_file = Some(seed.clone());
    }
    Ok(config)
}

pub fn open_catalog(global: &GlobalArgs) -> Result<(ProjectCatalog, FolioConfig)> {
    let config = load_config(global)?;

    let seed: Box<dyn SeedSource> = match &config.seed_file {
        Some(path) => Box::new(FileSeed::new(path)),
        None => Box::new(BuiltinSeed),
    };
    let file_store = FileStore::new(&config.store_dir);
    let store: Box<dyn KeyValueStore> = if global.ephemeral {
        // Start from what is on disk; writes stay in memory.
        let persisted = file_store
            .get(&config.storage_key)
            .context("failed to read persisted projects")?;
        Box::new(match persisted {
            Some(value) => MemoryStore::with_entry(config.storage_key.as_str(), value),
            None => MemoryStore::new(),
        })
    } else {
        Box::new(file_store)
    };
    debug!(
        seed = %seed.name(),
        store_dir = %config.store_dir.display(),
        ephemeral = global.ephemeral,
        "opening catalog"
    );

    let mut catalog =
        ProjectCatalog::initialize_with_key(seed.as_ref(), store, &config.storage_key)
            .context("failed to load portfolio projects")?;
    catalog.set_sort(config.default_sort);

    Ok((catalog, config))
}

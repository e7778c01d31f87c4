pub mod catalog;
pub mod config;
pub mod error;
pub mod filters;
pub mod record;
pub mod seed;
pub mod slug;
pub mod store;
pub mod thumbnail;

pub use catalog::ProjectCatalog;
pub use config::FolioConfig;
pub use error::{CatalogError, Result, ValidationError};
pub use filters::{CategoryFilter, SortKey, ViewQuery};
pub use record::{parse_technologies, Category, NewProject, ProjectRecord, ProjectStatus};
pub use seed::{BuiltinSeed, FileSeed, SeedSource, StaticSeed};
pub use slug::slugify;
pub use store::{FileStore, KeyValueStore, MemoryStore, STORAGE_KEY};
pub use thumbnail::resolve_thumbnail;

//! The project catalog: authoritative record list plus the derived view.
//!
//! A `ProjectCatalog` is built once by the host and passed around by
//! reference. Every setter recomputes the view before returning, so
//! `view()` always reflects the current filter, search and sort.

use std::collections::{BTreeMap, HashSet};

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::error::{CatalogError, Result};
use crate::filters::{CategoryFilter, SortKey, ViewQuery};
use crate::record::{Category, NewProject, ProjectRecord, ProjectStatus};
use crate::seed::SeedSource;
use crate::slug::project_id;
use crate::store::{KeyValueStore, STORAGE_KEY};

pub struct ProjectCatalog {
    records: Vec<ProjectRecord>,
    /// Ids that came from the seed source; never written to the store.
    seed_ids: HashSet<String>,
    query: ViewQuery,
    view: Vec<ProjectRecord>,
    store: Box<dyn KeyValueStore>,
    storage_key: String,
}

impl std::fmt::Debug for ProjectCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectCatalog")
            .field("records", &self.records.len())
            .field("query", &self.query)
            .field("view", &self.view.len())
            .field("storage_key", &self.storage_key)
            .finish()
    }
}

impl ProjectCatalog {
    /// Load the seed list and merge in persisted user projects.
    ///
    /// Only an unavailable seed source fails. Unreadable or corrupt persisted
    /// data is logged and dropped; inadmissible or duplicate records are
    /// skipped one by one.
    pub fn initialize(seed: &dyn SeedSource, store: Box<dyn KeyValueStore>) -> Result<Self> {
        Self::initialize_with_key(seed, store, STORAGE_KEY)
    }

    pub fn initialize_with_key(
        seed: &dyn SeedSource,
        store: Box<dyn KeyValueStore>,
        storage_key: &str,
    ) -> Result<Self> {
        let seed_records = seed.load()?;
        let persisted = read_persisted(store.as_ref(), storage_key);

        let mut catalog = Self {
            records: Vec::with_capacity(seed_records.len() + persisted.len()),
            seed_ids: HashSet::new(),
            query: ViewQuery::default(),
            view: Vec::new(),
            store,
            storage_key: storage_key.to_string(),
        };

        for record in seed_records {
            let id = record.id.clone();
            if catalog.admit(record, "seed") {
                catalog.seed_ids.insert(id);
            }
        }
        let seeded = catalog.records.len();
        for record in persisted {
            catalog.admit(record, "persisted");
        }

        catalog.refresh();
        info!(
            seed = %seed.name(),
            seeded,
            user = catalog.records.len() - seeded,
            "project catalog initialized"
        );
        Ok(catalog)
    }

    fn admit(&mut self, record: ProjectRecord, origin: &str) -> bool {
        if let Err(err) = record.check_admissible() {
            warn!(origin, id = %record.id, %err, "skipping invalid project");
            return false;
        }
        if self.contains(&record.id) {
            warn!(origin, id = %record.id, "skipping duplicate project id");
            return false;
        }
        self.records.push(record);
        true
    }

    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.query.filter = filter;
        self.refresh();
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.query.search = text.into();
        self.refresh();
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.query.sort = sort;
        self.refresh();
    }

    /// Derive the view from the current state without touching it.
    pub fn recompute(&self) -> Vec<ProjectRecord> {
        self.query.apply(&self.records)
    }

    fn refresh(&mut self) {
        self.view = self.recompute();
        debug!(
            filter = %self.query.filter,
            search = %self.query.search,
            sort = %self.query.sort,
            visible = self.view.len(),
            "view recomputed"
        );
    }

    /// Validate, assign an id, append, recompute and persist.
    ///
    /// The catalog is unchanged if validation fails. A failed store write is
    /// logged; the record stays in memory either way.
    pub fn add_record(&mut self, data: NewProject) -> Result<ProjectRecord> {
        data.validate()?;

        let id = project_id(&data.title, Utc::now().timestamp_millis(), |candidate| {
            self.contains(candidate)
        });
        let record = ProjectRecord {
            id,
            title: data.title.trim().to_string(),
            description: data.description,
            category: data.category.unwrap_or_default(),
            technologies: data.technologies,
            live_url: data.live_url.trim().to_string(),
            github_url: data.github_url.filter(|url| !url.trim().is_empty()),
            thumbnail: data.thumbnail.filter(|thumb| !thumb.trim().is_empty()),
            featured: data.featured,
            date: Utc::now(),
            status: ProjectStatus::Completed,
        };

        self.records.push(record.clone());
        self.refresh();
        info!(id = %record.id, title = %record.title, "project added");

        if let Err(err) = self.persist() {
            warn!(%err, "could not persist user projects; keeping them in memory");
        }
        Ok(record)
    }

    pub fn quick_add(
        &mut self,
        title: impl Into<String>,
        live_url: impl Into<String>,
        description: impl Into<String>,
        category: Category,
        technologies: Vec<String>,
    ) -> Result<ProjectRecord> {
        self.add_record(NewProject {
            description: description.into(),
            category: Some(category),
            technologies,
            ..NewProject::new(title, live_url)
        })
    }

    fn persist(&mut self) -> Result<()> {
        let payload = serde_json::to_string(&self.user_records())
            .map_err(|err| CatalogError::json("user projects", err))?;
        self.store.set(&self.storage_key, &payload)
    }

    // Command interface for UI layers: apply the change, hand back the view.

    pub fn on_filter_changed(&mut self, filter: CategoryFilter) -> &[ProjectRecord] {
        self.set_filter(filter);
        self.view()
    }

    pub fn on_search_changed(&mut self, text: impl Into<String>) -> &[ProjectRecord] {
        self.set_search(text);
        self.view()
    }

    pub fn on_sort_changed(&mut self, sort: SortKey) -> &[ProjectRecord] {
        self.set_sort(sort);
        self.view()
    }

    pub fn on_add_project(&mut self, data: NewProject) -> Result<&[ProjectRecord]> {
        self.add_record(data)?;
        Ok(self.view())
    }

    pub fn view(&self) -> &[ProjectRecord] {
        &self.view
    }

    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    pub fn query(&self) -> &ViewQuery {
        &self.query
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&ProjectRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Records added at runtime or restored from the store.
    pub fn user_records(&self) -> Vec<&ProjectRecord> {
        self.records
            .iter()
            .filter(|record| !self.seed_ids.contains(&record.id))
            .collect()
    }

    pub fn category_counts(&self) -> BTreeMap<Category, usize> {
        let mut counts = BTreeMap::new();
        for record in &self.records {
            *counts.entry(record.category).or_insert(0) += 1;
        }
        counts
    }

    pub fn into_store(self) -> Box<dyn KeyValueStore> {
        self.store
    }
}

fn read_persisted(store: &dyn KeyValueStore, key: &str) -> Vec<ProjectRecord> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(err) => {
            warn!(key, %err, "could not read persisted projects; loading seed only");
            return Vec::new();
        }
    };
    if raw.trim().is_empty() {
        return Vec::new();
    }

    match serde_json::from_str::<Vec<ProjectRecord>>(&raw) {
        Ok(records) => records,
        Err(source) => {
            let err = CatalogError::persisted_corrupt(key, source);
            warn!(%err, "discarding persisted projects");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::parse_date;
    use crate::seed::StaticSeed;
    use crate::store::MemoryStore;

    fn record(id: &str, title: &str, category: Category, date: &str) -> ProjectRecord {
        ProjectRecord {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            category,
            technologies: Vec::new(),
            live_url: format!("https://{id}.dev"),
            github_url: None,
            thumbnail: None,
            featured: false,
            date: parse_date(date).unwrap(),
            status: ProjectStatus::Completed,
        }
    }

    fn example_seed() -> StaticSeed {
        StaticSeed(vec![
            record("a", "Shop", Category::Web, "2024-01-01"),
            record("b", "Art", Category::Design, "2024-01-02"),
        ])
    }

    fn ids(view: &[ProjectRecord]) -> Vec<&str> {
        view.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn end_to_end_example() {
        let mut catalog =
            ProjectCatalog::initialize(&example_seed(), Box::new(MemoryStore::new())).unwrap();

        assert_eq!(ids(catalog.on_sort_changed(SortKey::Recent)), vec!["b", "a"]);
        assert_eq!(
            ids(catalog.on_filter_changed(CategoryFilter::Only(Category::Design))),
            vec!["b"]
        );
        catalog.set_filter(CategoryFilter::All);
        assert_eq!(ids(catalog.on_search_changed("shop")), vec!["a"]);
        assert_eq!(
            catalog.query(),
            &ViewQuery {
                filter: CategoryFilter::All,
                search: "shop".into(),
                sort: SortKey::Recent,
            }
        );
    }

    #[test]
    fn initial_view_is_most_recent_first() {
        let catalog =
            ProjectCatalog::initialize(&example_seed(), Box::new(MemoryStore::new())).unwrap();
        assert_eq!(ids(catalog.view()), vec!["b", "a"]);
    }

    #[test]
    fn corrupt_persisted_data_keeps_seed() {
        let store = MemoryStore::with_entry(STORAGE_KEY, "{not json");
        let catalog = ProjectCatalog::initialize(&example_seed(), Box::new(store)).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn persisted_duplicates_and_invalid_entries_are_skipped() {
        let persisted = r#"[
            {"id":"a","title":"Clash","liveUrl":"https://clash.dev","date":"2024-03-01"},
            {"id":"c","title":"","liveUrl":"https://blank.dev","date":"2024-03-01"},
            {"id":"d","title":"Kept","liveUrl":"https://kept.dev","date":"2024-03-02"}
        ]"#;
        let store = MemoryStore::with_entry(STORAGE_KEY, persisted);
        let catalog = ProjectCatalog::initialize(&example_seed(), Box::new(store)).unwrap();

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get("a").unwrap().title, "Shop");
        assert!(catalog.contains("d"));
        let user: Vec<&str> = catalog
            .user_records()
            .into_iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(user, vec!["d"]);
    }

    #[test]
    fn empty_title_is_rejected_without_side_effects() {
        let mut catalog =
            ProjectCatalog::initialize(&example_seed(), Box::new(MemoryStore::new())).unwrap();

        let err = catalog
            .add_record(NewProject::new("   ", "https://x.dev"))
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(catalog.len(), 2);

        let err = catalog.add_record(NewProject::new("Title", "")).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn add_record_assigns_fresh_id_and_persists_user_records_only() {
        let mut catalog =
            ProjectCatalog::initialize(&example_seed(), Box::new(MemoryStore::new())).unwrap();

        let first = catalog
            .quick_add("Shop", "https://shop2.dev", "", Category::Web, Vec::new())
            .unwrap();
        let second = catalog
            .quick_add("Shop", "https://shop3.dev", "", Category::Web, Vec::new())
            .unwrap();

        assert_eq!(catalog.len(), 4);
        assert!(first.id.starts_with("shop-"));
        assert_ne!(first.id, second.id);
        assert!(catalog.view().iter().any(|r| r.id == second.id));

        let store = catalog.into_store();
        let saved: Vec<ProjectRecord> =
            serde_json::from_str(&store.get(STORAGE_KEY).unwrap().unwrap()).unwrap();
        let saved_ids: Vec<_> = saved.iter().map(|r| r.id.clone()).collect();
        assert_eq!(saved_ids, vec![first.id, second.id]);
    }

    #[test]
    fn failed_persist_keeps_record_in_memory() {
        let store = MemoryStore::new().read_only();
        let mut catalog = ProjectCatalog::initialize(&example_seed(), Box::new(store)).unwrap();

        let added = catalog
            .add_record(NewProject::new("Offline", "https://offline.dev"))
            .unwrap();
        assert!(catalog.contains(&added.id));
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn add_record_applies_defaults() {
        let mut catalog =
            ProjectCatalog::initialize(&example_seed(), Box::new(MemoryStore::new())).unwrap();
        let added = catalog
            .add_record(NewProject {
                thumbnail: Some(" ".into()),
                ..NewProject::new("New Thing", "https://new.dev")
            })
            .unwrap();

        assert_eq!(added.category, Category::Web);
        assert_eq!(added.status, ProjectStatus::Completed);
        assert!(!added.featured);
        assert!(added.technologies.is_empty());
        assert_eq!(added.thumbnail, None);
    }

    #[test]
    fn category_counts_cover_full_set() {
        let mut catalog =
            ProjectCatalog::initialize(&example_seed(), Box::new(MemoryStore::new())).unwrap();
        catalog.set_filter(CategoryFilter::Only(Category::Web));

        let counts = catalog.category_counts();
        assert_eq!(counts.get(&Category::Web), Some(&1));
        assert_eq!(counts.get(&Category::Design), Some(&1));
        assert_eq!(counts.get(&Category::Mobile), None);
    }
}

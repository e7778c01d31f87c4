use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{CatalogError, ValidationError};
use crate::record::{Category, ProjectRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn includes(self, record: &ProjectRecord) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => record.category == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::Only)
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Only(category) => write!(f, "{category}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Newest first.
    #[default]
    Recent,
    /// Title ascending.
    Name,
    /// Category tag ascending.
    Category,
    /// Featured first, then newest first.
    Featured,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Recent => "recent",
            SortKey::Name => "name",
            SortKey::Category => "category",
            SortKey::Featured => "featured",
        }
    }

    pub fn compare(self, a: &ProjectRecord, b: &ProjectRecord) -> Ordering {
        match self {
            SortKey::Recent => b.date.cmp(&a.date),
            SortKey::Name => a.title.cmp(&b.title),
            SortKey::Category => a.category.as_str().cmp(b.category.as_str()),
            SortKey::Featured => b
                .featured
                .cmp(&a.featured)
                .then_with(|| b.date.cmp(&a.date)),
        }
    }
}

impl FromStr for SortKey {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "recent" => Ok(SortKey::Recent),
            "name" => Ok(SortKey::Name),
            "category" => Ok(SortKey::Category),
            "featured" => Ok(SortKey::Featured),
            _ => Err(CatalogError::InvalidSortKey(s.to_string())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The full filter/search/sort state a view is derived from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewQuery {
    pub filter: CategoryFilter,
    /// Stored as typed; matching lowercases it.
    pub search: String,
    pub sort: SortKey,
}

impl ViewQuery {
    /// Category filter, then search, then a stable sort. `records` is untouched.
    pub fn apply(&self, records: &[ProjectRecord]) -> Vec<ProjectRecord> {
        let needle = self.search.to_lowercase();

        let mut view: Vec<ProjectRecord> = records
            .iter()
            .filter(|record| self.filter.includes(record))
            .filter(|record| needle.is_empty() || record.matches_search(&needle))
            .cloned()
            .collect();

        // `sort_by` is stable: equal keys keep catalog order.
        view.sort_by(|a, b| self.sort.compare(a, b));
        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{parse_date, ProjectStatus};

    fn record(id: &str, title: &str, category: Category, date: &str, featured: bool) -> ProjectRecord {
        ProjectRecord {
            id: id.into(),
            title: title.into(),
            description: format!("{title} description"),
            category,
            technologies: Vec::new(),
            live_url: format!("https://{id}.dev"),
            github_url: None,
            thumbnail: None,
            featured,
            date: parse_date(date).unwrap(),
            status: ProjectStatus::Completed,
        }
    }

    fn ids(view: &[ProjectRecord]) -> Vec<&str> {
        view.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn filter_parsing() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "mobile".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::Mobile)
        );
        assert!("games".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn unknown_sort_key_is_rejected() {
        assert!(matches!(
            "popular".parse::<SortKey>(),
            Err(CatalogError::InvalidSortKey(_))
        ));
        assert_eq!("Featured".parse::<SortKey>().unwrap(), SortKey::Featured);
    }

    #[test]
    fn category_sort_is_stable() {
        let records = vec![
            record("w1", "Zeta", Category::Web, "2024-01-01", false),
            record("d1", "Alpha", Category::Design, "2024-01-02", false),
            record("w2", "Beta", Category::Web, "2024-01-03", false),
            record("d2", "Gamma", Category::Design, "2024-01-04", false),
        ];
        let query = ViewQuery {
            sort: SortKey::Category,
            ..Default::default()
        };
        assert_eq!(ids(&query.apply(&records)), vec!["d1", "d2", "w1", "w2"]);
    }

    #[test]
    fn featured_sort_groups_then_orders_by_date() {
        let records = vec![
            record("a", "A", Category::Web, "2024-01-01", false),
            record("b", "B", Category::Web, "2024-01-05", true),
            record("c", "C", Category::Web, "2024-01-09", false),
            record("d", "D", Category::Web, "2024-01-02", true),
        ];
        let query = ViewQuery {
            sort: SortKey::Featured,
            ..Default::default()
        };
        assert_eq!(ids(&query.apply(&records)), vec!["b", "d", "c", "a"]);
    }

    #[test]
    fn filter_and_search_combine() {
        let records = vec![
            record("a", "Shop", Category::Web, "2024-01-01", false),
            record("b", "Art", Category::Design, "2024-01-02", false),
            record("c", "Shop Designs", Category::Design, "2024-01-03", false),
        ];
        let query = ViewQuery {
            filter: CategoryFilter::Only(Category::Design),
            search: "SHOP".into(),
            sort: SortKey::Recent,
        };
        assert_eq!(ids(&query.apply(&records)), vec!["c"]);
    }

    #[test]
    fn search_whitespace_is_matched_literally() {
        let records: Vec<ProjectRecord> = [
            record("a", "Shop", Category::Web, "2024-01-01", false),
            record("b", "Shop front", Category::Web, "2024-01-02", false),
            record("c", "Art", Category::Design, "2024-01-03", false),
        ]
        .into_iter()
        .map(|record| ProjectRecord {
            description: String::new(),
            ..record
        })
        .collect();
        let mut query = ViewQuery {
            search: "shop ".into(),
            ..Default::default()
        };
        assert_eq!(ids(&query.apply(&records)), vec!["b"]);

        query.search = " ".into();
        assert_eq!(ids(&query.apply(&records)), vec!["b"]);
    }
}

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Portfolio category tag.
///
/// Serialized as the lowercase tag. Reading is lenient: an unrecognized tag
/// in stored data becomes `Other` rather than failing the whole array.
/// Parsing user input through [`FromStr`] is strict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    #[default]
    Web,
    Design,
    Mobile,
    Backend,
    Other,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Web,
        Category::Design,
        Category::Mobile,
        Category::Backend,
        Category::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Web => "web",
            Category::Design => "design",
            Category::Mobile => "mobile",
            Category::Backend => "backend",
            Category::Other => "other",
        }
    }

    /// Human-facing label used on project cards.
    pub fn label(self) -> &'static str {
        match self {
            Category::Web => "Web Development",
            Category::Design => "UI/UX Design",
            Category::Mobile => "Mobile Apps",
            Category::Backend => "Backend",
            Category::Other => "Other",
        }
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::InvalidVariant {
                field: "category",
                value: s.to_string(),
            })
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        value.parse().unwrap_or(Category::Other)
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProjectStatus {
    #[default]
    Completed,
    InProgress,
    Planned,
    Archived,
}

impl ProjectStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::Completed => "completed",
            ProjectStatus::InProgress => "in-progress",
            ProjectStatus::Planned => "planned",
            ProjectStatus::Archived => "archived",
        }
    }
}

impl From<String> for ProjectStatus {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "in-progress" | "in_progress" => ProjectStatus::InProgress,
            "planned" => ProjectStatus::Planned,
            "archived" => ProjectStatus::Archived,
            _ => ProjectStatus::Completed,
        }
    }
}

impl From<ProjectStatus> for String {
    fn from(value: ProjectStatus) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One portfolio project entry.
///
/// Required fields default to empty on read so that a single bad entry in
/// stored data is caught by [`ProjectRecord::check_admissible`] and skipped,
/// instead of failing deserialization of every entry around it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub live_url: String,
    #[serde(default, rename = "github", skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, with = "date_format")]
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub status: ProjectStatus,
}

impl ProjectRecord {
    /// A record enters the catalog only with a non-blank id, title and live URL.
    pub fn check_admissible(&self) -> Result<(), ValidationError> {
        require("id", &self.id)?;
        require("title", &self.title)?;
        require("liveUrl", &self.live_url)?;
        Ok(())
    }

    /// `needle` must already be lowercased.
    pub fn matches_search(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self
                .technologies
                .iter()
                .any(|tech| tech.to_lowercase().contains(needle))
    }
}

/// Input for adding a project at runtime.
#[derive(Debug, Clone, Default)]
pub struct NewProject {
    pub title: String,
    pub live_url: String,
    pub description: String,
    pub category: Option<Category>,
    pub technologies: Vec<String>,
    pub thumbnail: Option<String>,
    pub github_url: Option<String>,
    pub featured: bool,
}

impl NewProject {
    pub fn new(title: impl Into<String>, live_url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            live_url: live_url.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require("title", &self.title)?;
        require("liveUrl", &self.live_url)?;
        Ok(())
    }
}

/// Split a comma-separated technology list, trimming entries and dropping blanks.
pub fn parse_technologies(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tech| !tech.is_empty())
        .map(str::to_string)
        .collect()
}

fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::Empty { field })
    } else {
        Ok(())
    }
}

/// Dates are written as RFC 3339 and read from either RFC 3339 or a bare
/// `YYYY-MM-DD` (taken as midnight UTC).
mod date_format {
    use chrono::{DateTime, NaiveDate, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.to_rfc3339_opts(chrono::SecondsFormat::AutoSi, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid date '{raw}'")))
    }

    pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
        let raw = raw.trim();
        if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
            return Some(ts.with_timezone(&Utc));
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
    }
}

pub use date_format::parse as parse_date;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_with_defaults() {
        let record: ProjectRecord = serde_json::from_value(json!({
            "id": "shop",
            "title": "Shop",
            "liveUrl": "https://example.com",
            "date": "2024-01-28"
        }))
        .unwrap();

        assert_eq!(record.category, Category::Web);
        assert!(record.technologies.is_empty());
        assert!(!record.featured);
        assert_eq!(record.status, ProjectStatus::Completed);
        assert_eq!(record.date, parse_date("2024-01-28T00:00:00Z").unwrap());
        assert!(record.check_admissible().is_ok());
    }

    #[test]
    fn unknown_tags_are_lenient_on_read() {
        let record: ProjectRecord = serde_json::from_value(json!({
            "id": "x",
            "title": "X",
            "liveUrl": "https://x.dev",
            "category": "games",
            "status": "someday",
            "date": "2024-02-01T10:00:00.000Z"
        }))
        .unwrap();
        assert_eq!(record.category, Category::Other);
        assert_eq!(record.status, ProjectStatus::Completed);
    }

    #[test]
    fn category_parse_is_strict() {
        assert_eq!("Design".parse::<Category>().unwrap(), Category::Design);
        assert!("games".parse::<Category>().is_err());
    }

    #[test]
    fn missing_live_url_is_not_admissible() {
        let record: ProjectRecord =
            serde_json::from_value(json!({"id": "x", "title": "X"})).unwrap();
        assert_eq!(
            record.check_admissible(),
            Err(ValidationError::Empty { field: "liveUrl" })
        );
    }

    #[test]
    fn search_covers_title_description_and_technologies() {
        let record = ProjectRecord {
            id: "dash".into(),
            title: "Analytical Dashboard".into(),
            description: "Charts for business intelligence".into(),
            category: Category::Web,
            technologies: vec!["React".into(), "D3.js".into()],
            live_url: "https://dash.dev".into(),
            github_url: None,
            thumbnail: None,
            featured: false,
            date: Utc::now(),
            status: ProjectStatus::Completed,
        };
        assert!(record.matches_search("dashboard"));
        assert!(record.matches_search("intelligence"));
        assert!(record.matches_search("d3"));
        assert!(!record.matches_search("vue"));
    }

    #[test]
    fn parse_technologies_trims_and_drops_blanks() {
        assert_eq!(
            parse_technologies(" Rust, ,Axum ,"),
            vec!["Rust".to_string(), "Axum".to_string()]
        );
    }
}

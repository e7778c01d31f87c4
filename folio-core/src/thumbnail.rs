use crate::record::ProjectRecord;

const PLACEHOLDER_BASE: &str = "https://picsum.photos/400/300";

/// Image reference for a project card. Never empty.
pub fn resolve_thumbnail(record: &ProjectRecord) -> String {
    match record.thumbnail.as_deref().map(str::trim) {
        Some(explicit) if !explicit.is_empty() => explicit.to_string(),
        _ => placeholder_for(&record.id),
    }
}

pub fn placeholder_for(id: &str) -> String {
    format!("{PLACEHOLDER_BASE}?random={}", urlencoding::encode(id))
}

//! Text and JSON rendering of catalog views.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use folio_core::{resolve_thumbnail, ProjectRecord};
use serde::Serialize;

/// Technologies shown on a card before collapsing into "+N more".
const MAX_CARD_TECHNOLOGIES: usize = 4;

/// One page of a view.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<'a> {
    pub page: usize,
    pub pages: usize,
    pub total: usize,
    pub projects: Vec<CardJson<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardJson<'a> {
    #[serde(flatten)]
    pub record: &'a ProjectRecord,
    pub category_label: &'static str,
    pub resolved_thumbnail: String,
}

impl<'a> CardJson<'a> {
    pub fn new(record: &'a ProjectRecord) -> Self {
        Self {
            record,
            category_label: record.category.label(),
            resolved_thumbnail: resolve_thumbnail(record),
        }
    }
}

/// Slice `view` into 1-based page `page` of `page_size`.
/// Out-of-range pages clamp to the last page.
pub fn paginate(view: &[ProjectRecord], page: usize, page_size: usize) -> Page<'_> {
    let page_size = page_size.max(1);
    let pages = view.len().div_ceil(page_size).max(1);
    let page = page.clamp(1, pages);
    let start = (page - 1) * page_size;
    let end = (start + page_size).min(view.len());

    Page {
        page,
        pages,
        total: view.len(),
        projects: view[start..end].iter().map(CardJson::new).collect(),
    }
}

pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

pub fn render_card(record: &ProjectRecord) -> String {
    let mut out = String::new();

    let badge = if record.featured { "  ★ Featured" } else { "" };
    let _ = writeln!(out, "{}{}", record.title, badge);
    let _ = writeln!(
        out,
        "  [{}] {} · {} · id: {}",
        record.category.label(),
        format_date(record.date),
        record.status,
        record.id
    );
    if !record.description.trim().is_empty() {
        let _ = writeln!(out, "  {}", record.description.trim());
    }

    if !record.technologies.is_empty() {
        let shown: Vec<&str> = record
            .technologies
            .iter()
            .take(MAX_CARD_TECHNOLOGIES)
            .map(String::as_str)
            .collect();
        let hidden = record.technologies.len().saturating_sub(MAX_CARD_TECHNOLOGIES);
        let more = if hidden > 0 {
            format!(" +{hidden} more")
        } else {
            String::new()
        };
        let _ = writeln!(out, "  tech: {}{}", shown.join(", "), more);
    }

    let _ = writeln!(out, "  live: {}", record.live_url);
    if let Some(github) = &record.github_url {
        let _ = writeln!(out, "  code: {github}");
    }
    let _ = writeln!(out, "  image: {}", resolve_thumbnail(record));
    out
}

pub fn render_page(page: &Page<'_>) -> String {
    if page.total == 0 {
        return "No projects found\nTry adjusting your filters or search terms\n".to_string();
    }

    let mut out = String::new();
    for card in &page.projects {
        out.push_str(&render_card(card.record));
        out.push('\n');
    }
    let _ = writeln!(
        out,
        "{} project(s) · page {}/{}",
        page.total, page.page, page.pages
    );
    out
}

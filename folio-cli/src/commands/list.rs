use anyhow::{Context, Result};
use clap::Parser;
use folio_core::{CategoryFilter, SortKey};

use crate::context::open_catalog;
use crate::render::{paginate, render_page};
use crate::GlobalArgs;

#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Category to show: all, web, design, mobile, backend, other
    #[arg(long, short = 'c', default_value = "all")]
    pub category: CategoryFilter,

    /// Case-insensitive text matched against title, description and technologies
    #[arg(long, short = 's', default_value = "")]
    pub search: String,

    /// Sort order: recent, name, category, featured (default from config)
    #[arg(long)]
    pub sort: Option<SortKey>,

    /// Page to show (1-based)
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run_list(global: &GlobalArgs, args: ListArgs) -> Result<()> {
    let (mut catalog, config) = open_catalog(global)?;

    catalog.on_filter_changed(args.category);
    catalog.on_search_changed(args.search);
    if let Some(sort) = args.sort {
        catalog.on_sort_changed(sort);
    }

    let page = paginate(catalog.view(), args.page, config.page_size);
    if args.json {
        let json = serde_json::to_string_pretty(&page).context("failed to serialize view")?;
        println!("{json}");
    } else {
        print!("{}", render_page(&page));
    }
    Ok(())
}

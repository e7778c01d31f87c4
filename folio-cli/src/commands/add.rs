use anyhow::{Context, Result};
use clap::Parser;
use folio_core::{parse_technologies, Category, NewProject};

use crate::context::open_catalog;
use crate::render::render_card;
use crate::GlobalArgs;

#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Project title (also used to derive the id)
    #[arg(long)]
    pub title: String,

    /// Live URL of the project
    #[arg(long = "url", value_name = "URL")]
    pub live_url: String,

    /// Short description
    #[arg(long, default_value = "")]
    pub description: String,

    /// Category: web, design, mobile, backend, other
    #[arg(long, default_value = "web")]
    pub category: Category,

    /// Technologies, comma separated (e.g. "Rust, Axum")
    #[arg(long = "tech", value_name = "LIST", default_value = "")]
    pub technologies: String,

    /// Thumbnail URL or path (a placeholder is used when omitted)
    #[arg(long)]
    pub thumbnail: Option<String>,

    /// Source repository URL
    #[arg(long)]
    pub github: Option<String>,

    /// Mark as featured
    #[arg(long)]
    pub featured: bool,

    /// Output the new project as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run_add(global: &GlobalArgs, args: AddArgs) -> Result<()> {
    let (mut catalog, _) = open_catalog(global)?;

    let data = NewProject {
        description: args.description,
        category: Some(args.category),
        technologies: parse_technologies(&args.technologies),
        thumbnail: args.thumbnail,
        github_url: args.github,
        featured: args.featured,
        ..NewProject::new(args.title, args.live_url)
    };
    let record = catalog.add_record(data).context("project was not added")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        println!("✓ Project \"{}\" added successfully!", record.title);
        print!("{}", render_card(&record));
    }
    Ok(())
}

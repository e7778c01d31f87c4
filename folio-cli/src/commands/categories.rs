use anyhow::Result;
use clap::Parser;
use folio_core::Category;

use crate::context::open_catalog;
use crate::GlobalArgs;

#[derive(Parser, Debug)]
pub struct CategoriesArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run_categories(global: &GlobalArgs, args: CategoriesArgs) -> Result<()> {
    let (catalog, _) = open_catalog(global)?;
    let counts = catalog.category_counts();

    if args.json {
        let map: serde_json::Map<String, serde_json::Value> = Category::ALL
            .into_iter()
            .map(|c| (c.to_string(), counts.get(&c).copied().unwrap_or(0).into()))
            .collect();
        println!("{}", serde_json::to_string_pretty(&map)?);
        return Ok(());
    }

    println!("{:<18} {:>5}", "all", catalog.len());
    for category in Category::ALL {
        let count = counts.get(&category).copied().unwrap_or(0);
        println!("{:<18} {:>5}", format!("{} ({})", category, category.label()), count);
    }
    Ok(())
}

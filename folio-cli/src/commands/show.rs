use anyhow::{bail, Result};
use clap::Parser;

use crate::context::open_catalog;
use crate::render::{render_card, CardJson};
use crate::GlobalArgs;

#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Project id (see `folio list`)
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run_show(global: &GlobalArgs, args: ShowArgs) -> Result<()> {
    let (catalog, _) = open_catalog(global)?;

    let Some(record) = catalog.get(&args.id) else {
        bail!("No project with id '{}'", args.id);
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&CardJson::new(record))?);
    } else {
        print!("{}", render_card(record));
    }
    Ok(())
}

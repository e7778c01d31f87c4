//! folio CLI - browse and extend a personal portfolio's project catalog
//!
//! The binary is the "UI layer" around `folio_core::ProjectCatalog`: it builds
//! one catalog per invocation from the configured seed source and store,
//! applies the requested filter/search/sort, and renders the resulting view.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

mod commands;
mod context;
mod render;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "folio",
    author,
    version,
    about = "Browse, filter and extend a portfolio project catalog"
)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Flags shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Path to the TOML configuration file (default: ~/.folio/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory for persisted user projects (overrides config)
    #[arg(long = "store-dir", global = true, value_name = "DIR")]
    pub store_dir: Option<PathBuf>,

    /// JSON file with seed projects (overrides config; builtin list otherwise)
    #[arg(long, global = true, value_name = "PATH")]
    pub seed: Option<PathBuf>,

    /// Read persisted projects but keep new additions in memory only
    #[arg(long, global = true)]
    pub ephemeral: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List projects with optional category filter, search and sort
    List(commands::list::ListArgs),
    /// Show one project by id
    Show(commands::show::ShowArgs),
    /// Add a project and persist it
    Add(commands::add::AddArgs),
    /// Count projects per category
    Categories(commands::categories::CategoriesArgs),
    /// Inspect folio configuration
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig {
        debug: cli.global.debug,
    })
    .ok();

    match cli.command {
        Commands::List(args) => commands::run_list(&cli.global, args),
        Commands::Show(args) => commands::run_show(&cli.global, args),
        Commands::Add(args) => commands::run_add(&cli.global, args),
        Commands::Categories(args) => commands::run_categories(&cli.global, args),
        Commands::Config(args) => commands::run_config(&cli.global, args),
    }
}

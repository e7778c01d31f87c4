use anyhow::Result;
use clap::{Parser, Subcommand};
use folio_core::FolioConfig;

use crate::context::load_config;
use crate::GlobalArgs;

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show config file path
    Path,
    /// Show the effective configuration (file, env and flags merged)
    Show,
}

pub fn run_config(global: &GlobalArgs, args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Path => {
            let path = global
                .config
                .clone()
                .unwrap_or_else(FolioConfig::config_path);
            println!("{}", path.display());
        }
        ConfigCommands::Show => {
            let config = load_config(global)?;
            print!("{}", config.to_toml()?);
        }
    }
    Ok(())
}

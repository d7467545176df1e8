mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::config::ConfigFile;

fn main() -> Result<()> {
    // Logs go to stderr so command output stays pipeable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive("statline=info".parse()?))
        .init();

    let cli = Cli::parse();

    let config_file = if cli.config.exists() {
        match ConfigFile::load(&cli.config) {
            Ok(c) => {
                debug!("Loaded config from {:?}", cli.config);
                c
            }
            Err(e) => {
                warn!("{:#}, using defaults", e);
                ConfigFile::default()
            }
        }
    } else {
        ConfigFile::default()
    };

    match cli.command {
        Command::Points { actions } => commands::points::run(&actions),
        Command::BoxScore {
            plays,
            name,
            no_share,
            json,
        } => {
            let config = config_file.to_export_config(cli.cache_dir.as_deref(), None);
            commands::box_score::run(&config, &plays, name.as_deref(), no_share, json)
        }
        Command::Export {
            table,
            name,
            sheet,
            no_share,
        } => {
            let config =
                config_file.to_export_config(cli.cache_dir.as_deref(), sheet.as_deref());
            commands::export::run(&config, &table, &name, no_share)
        }
        Command::Inspect { file } => commands::inspect::run(&file),
    }
}

//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "statline")]
#[command(about = "Basketball stat tracking and spreadsheet export")]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true, default_value = "statline.toml")]
    pub config: PathBuf,

    /// Scratch directory for exported files (overrides the config file)
    #[arg(long, global = true, env = "STATLINE_CACHE_DIR")]
    pub cache_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the point value of scoring actions
    Points {
        /// Action identifiers (e.g. three_point_make, 2pt, ft)
        #[arg(required = true)]
        actions: Vec<String>,
    },

    /// Aggregate a JSON list of plays into a box score and export it
    BoxScore {
        /// JSON file containing an array of plays
        plays: PathBuf,

        /// Destination file name inside the cache directory
        #[arg(short, long)]
        name: Option<String>,

        /// Write the workbook without opening the share step
        #[arg(long)]
        no_share: bool,

        /// Print the box score as JSON instead of TSV
        #[arg(long)]
        json: bool,
    },

    /// Export a JSON array of flat objects as a workbook
    Export {
        /// JSON file containing an array of objects
        table: PathBuf,

        /// Destination file name inside the cache directory
        #[arg(short, long)]
        name: String,

        /// Worksheet name (overrides the config file)
        #[arg(long)]
        sheet: Option<String>,

        /// Write the workbook without opening the share step
        #[arg(long)]
        no_share: bool,
    },

    /// Print the first sheet of a workbook as TSV
    Inspect {
        /// Path to an .xlsx file
        file: PathBuf,
    },
}

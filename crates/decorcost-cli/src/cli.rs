//! CLI definition using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use decorcost_types::OutputFormat;

#[derive(Parser)]
#[command(name = "decorcost")]
#[command(version)]
#[command(about = "Tiered renovation cost estimates from interior photo analysis")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Catalog price file (JSON or TOML). Uses config value if not specified.
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Estimate costs from a saved vision analysis
    Estimate {
        /// Path to the vision model output (JSON, fenced JSON accepted)
        vision: PathBuf,

        /// Save vision analysis and estimates to this JSON file
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Show which catalog key item names map to
    Resolve {
        /// Item names as extracted from an image
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// List catalog entries and tier prices
    Catalog,

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set catalog file
        #[arg(long)]
        set_catalog: Option<PathBuf>,

        /// Use the bundled catalog again
        #[arg(long)]
        clear_catalog: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set currency label
        #[arg(long)]
        set_currency: Option<String>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

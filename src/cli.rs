//! CLI definitions for patternkit.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// patternkit CLI.
#[derive(Parser)]
#[command(name = "patternkit")]
#[command(about = "Block pattern registry and template picker visibility")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path
    #[arg(
        short,
        long,
        default_value = "config/default.toml",
        env = "PATTERNKIT_CONFIG",
        global = true
    )]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List all registered patterns
    List {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Only show patterns in this category
        #[arg(long)]
        category: Option<String>,
    },

    /// Show one registered pattern as JSON
    Show {
        /// Pattern name, including namespace
        name: String,
    },

    /// Evaluate template picker availability and visibility
    Picker {
        /// Editor state JSON file (`postType` and `blocks`)
        #[arg(long)]
        state: PathBuf,
    },

    /// Validate the configuration and pattern definitions
    Check,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Table,
    Json,
}

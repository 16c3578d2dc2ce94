//! patternkit - block pattern registry and template picker visibility
//!
//! Main entry point for the patternkit CLI.

use clap::Parser;

use patternkit_config::ConfigLoader;

mod bootstrap;
mod cli;
mod commands;
mod logging;

use cli::{Cli, Commands};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = ConfigLoader::load_or_default(&cli.config)?;
    logging::init_tracing(&config.logging)?;

    match cli.command {
        Commands::List { format, category } => {
            commands::list(&config, format, category.as_deref())
        }
        Commands::Show { name } => commands::show(&config, &name),
        Commands::Picker { state } => commands::picker(&config, &state),
        Commands::Check => commands::check(&config),
    }
}

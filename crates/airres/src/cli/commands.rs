//! CLI command definitions.

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Interactive menu arguments.
#[derive(Debug, Default, Args)]
pub struct MenuCommand {
    /// Seats per flight (overrides the configured capacity)
    #[arg(long, value_name = "SEATS")]
    pub capacity: Option<usize>,

    /// Refuse repeated reservations for the same passenger
    #[arg(long)]
    pub reject_duplicates: bool,

    /// Don't print the welcome banner
    #[arg(long)]
    pub no_banner: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

//! Command-line interface for airres.
//!
//! This module provides the CLI structure for the `airres` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{ConfigCommand, MenuCommand};

use crate::config::Config;
use crate::logging::Verbosity;

/// airres - Per-flight passenger reservations
///
/// Reserve, cancel and check seats on any number of flights from an
/// interactive menu. Reservations live only as long as the session.
#[derive(Debug, Parser)]
#[command(name = "airres")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute (defaults to `menu`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start the interactive reservation menu
    Menu(MenuCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.verbose, self.quiet)
    }
}

impl MenuCommand {
    /// Apply the command-line overrides on top of a loaded configuration.
    pub fn apply(&self, config: &mut Config) {
        if let Some(capacity) = self.capacity {
            config.registry.capacity = capacity;
        }
        if self.reject_duplicates {
            config.registry.reject_duplicates = true;
        }
        if self.no_banner {
            config.session.show_banner = false;
        }
    }
}

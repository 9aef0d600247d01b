//! `airres` - CLI for the airline reservation registry
//!
//! Runs the interactive reservation menu by default, and offers a few
//! configuration helpers.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io;

use anyhow::Context;
use clap::Parser;

use airres::cli::{Cli, Command, ConfigCommand, MenuCommand};
use airres::{init_logging, Config, Session};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone()).context("loading configuration")?;

    match cli.command {
        None => handle_menu(config, &MenuCommand::default()),
        Some(Command::Menu(menu_cmd)) => handle_menu(config, &menu_cmd),
        Some(Command::Config(config_cmd)) => handle_config(&config, config_cmd),
    }
}

fn handle_menu(mut config: Config, cmd: &MenuCommand) -> anyhow::Result<()> {
    cmd.apply(&mut config);
    config.validate().context("applying command-line overrides")?;

    let stdin = io::stdin();
    let mut session = Session::new(&config, stdin.lock(), io::stdout())?;
    session.run()?;
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", config.to_json()?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Registry]");
                println!("  Capacity:           {}", config.registry.capacity);
                println!(
                    "  Reject duplicates:  {}",
                    config.registry.reject_duplicates
                );
                println!();
                println!("[Session]");
                println!(
                    "  Flight pattern:     {}",
                    config
                        .session
                        .flight_number_pattern
                        .as_deref()
                        .unwrap_or("(any)")
                );
                println!("  Show banner:        {}", config.session.show_banner);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}

//! Configuration management CLI commands.
//!
//! `config get`, `config set`, `config list`, `config path` and
//! `config init` for viewing and modifying settings from the command line.

use clap::Subcommand;
use geocell::config::{ConfigFile, ConfigKey};

use super::common::Context;
use crate::error::CliError;

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Get a configuration value
    Get {
        /// Configuration key in format section.key (e.g., overlay.max_cells)
        key: String,
    },

    /// Set a configuration value
    Set {
        /// Configuration key in format section.key (e.g., overlay.max_cells)
        key: String,

        /// Value to set
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// List all configuration settings
    List,

    /// Show the configuration file path
    Path,

    /// Write a default configuration file if none exists
    Init,
}

/// Run a config subcommand.
pub fn run(context: &Context, command: ConfigCommands) -> Result<(), CliError> {
    match command {
        ConfigCommands::Get { key } => run_get(context, &key),
        ConfigCommands::Set { key, value } => run_set(context, &key, &value),
        ConfigCommands::List => run_list(context),
        ConfigCommands::Path => run_path(context),
        ConfigCommands::Init => run_init(context),
    }
}

fn parse_key(key: &str) -> Result<ConfigKey, CliError> {
    key.parse().map_err(|_| {
        CliError::Config(format!(
            "Unknown configuration key '{}'. Use 'geocell config list' to see available keys.",
            key
        ))
    })
}

fn run_get(context: &Context, key: &str) -> Result<(), CliError> {
    let config_key = parse_key(key)?;
    let config = context.load_config()?;
    let value = config_key.get(&config);

    if value.is_empty() {
        println!("(not set)");
    } else {
        println!("{}", value);
    }
    Ok(())
}

fn run_set(context: &Context, key: &str, value: &str) -> Result<(), CliError> {
    let config_key = parse_key(key)?;
    let path = context.config_path();

    let mut config = context.load_config()?;
    config_key.set(&mut config, value)?;
    config.save_to(&path)?;

    println!("Set {} = {}", config_key.name(), config_key.get(&config));
    Ok(())
}

fn run_list(context: &Context) -> Result<(), CliError> {
    let config = context.load_config()?;

    println!("Configuration Settings");
    println!("======================");
    println!();

    let mut current_section = "";

    for key in ConfigKey::all() {
        let section = key.section();

        if section != current_section {
            if !current_section.is_empty() {
                println!();
            }
            println!("[{}]", section);
            current_section = section;
        }

        let value = key.get(&config);
        if value.is_empty() {
            println!("  {} = (not set)", key.key_name());
        } else {
            println!("  {} = {}", key.key_name(), value);
        }
    }

    Ok(())
}

fn run_path(context: &Context) -> Result<(), CliError> {
    println!("{}", context.config_path().display());
    Ok(())
}

fn run_init(context: &Context) -> Result<(), CliError> {
    let path = context.config_path();
    if path.exists() {
        println!("Config already exists at {}", path.display());
        return Ok(());
    }

    ConfigFile::ensure_exists_at(&path)?;
    println!("Created {}", path.display());
    Ok(())
}

//! geocell CLI
//!
//! Command-line front end to the geocell overlay engine: encode and decode
//! cells, list what a viewport covers, and run the overlay pipeline against
//! a fixed viewport.

mod commands;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use commands::{cells, config, decode, encode, providers, render};
use error::CliError;

#[derive(Parser)]
#[command(name = "geocell")]
#[command(version = geocell::VERSION)]
#[command(about = "Geohash grid overlay for slippy-map viewports", long_about = None)]
struct Cli {
    /// Config file to use instead of ~/.geocell/config.ini
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a coordinate to a cell code
    Encode(encode::EncodeArgs),

    /// Show the bounds of a cell code
    Decode(decode::DecodeArgs),

    /// List the cells covering a viewport
    Cells(cells::CellsArgs),

    /// Run the overlay pipeline for a viewport
    Render(render::RenderArgs),

    /// List available tile providers
    Providers,

    /// View and modify configuration
    Config {
        #[command(subcommand)]
        command: config::ConfigCommands,
    },
}

fn main() {
    let cli = Cli::parse();
    let context = commands::common::Context::new(cli.config, cli.verbose);

    let result = match cli.command {
        Commands::Encode(args) => encode::run(args),
        Commands::Decode(args) => decode::run(args),
        Commands::Cells(args) => cells::run(&context, args),
        Commands::Render(args) => render::run(&context, args),
        Commands::Providers => providers::run(),
        Commands::Config { command } => config::run(&context, command),
    };

    if let Err(e) = result {
        e.exit();
    }
}

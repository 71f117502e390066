//! CLI error handling with user-friendly messages.
//!
//! Centralizes error formatting and exit codes for every command.

use std::fmt;
use std::process;

use geocell::config::{ConfigFileError, ConfigKeyError};
use geocell::geohash::GeohashError;
use geocell::guard::CapExceeded;
use geocell::overlay::OverlayError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(String),
    /// Config file could not be read, parsed or written
    ConfigFile(ConfigFileError),
    /// Bad command-line input
    InvalidInput(String),
    /// Cell code or precision problem
    Geohash(GeohashError),
    /// Overlay pipeline failure
    Overlay(OverlayError),
    /// Viewport needs more cells than allowed
    TooManyCells(CapExceeded),
    /// Failed to produce output
    Output(String),
}

impl CliError {
    /// Print the error and exit with status 1.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        match self {
            CliError::TooManyCells(_) => {
                eprintln!();
                eprintln!("Try a smaller --bbox, a higher --zoom, or raise --max-cells.");
            }
            CliError::ConfigFile(ConfigFileError::InvalidValue { .. }) => {
                eprintln!();
                eprintln!("Fix the value with 'geocell config set' or edit the file directly.");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::ConfigFile(e) => write!(f, "{}", e),
            CliError::InvalidInput(msg) => write!(f, "{}", msg),
            CliError::Geohash(e) => write!(f, "{}", e),
            CliError::Overlay(e) => write!(f, "Overlay failed: {}", e),
            CliError::TooManyCells(e) => write!(f, "{}", e),
            CliError::Output(msg) => write!(f, "Failed to write output: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::ConfigFile(e) => Some(e),
            CliError::Geohash(e) => Some(e),
            CliError::Overlay(e) => Some(e),
            CliError::TooManyCells(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::ConfigFile(e)
    }
}

impl From<ConfigKeyError> for CliError {
    fn from(e: ConfigKeyError) -> Self {
        CliError::Config(e.to_string())
    }
}

impl From<GeohashError> for CliError {
    fn from(e: GeohashError) -> Self {
        CliError::Geohash(e)
    }
}

impl From<OverlayError> for CliError {
    fn from(e: OverlayError) -> Self {
        CliError::Overlay(e)
    }
}

impl From<CapExceeded> for CliError {
    fn from(e: CapExceeded) -> Self {
        CliError::TooManyCells(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Output(e.to_string())
    }
}

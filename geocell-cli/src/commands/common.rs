//! Types shared across CLI commands.

use std::path::PathBuf;

use clap::Args;
use geocell::config::{config_file_path, ConfigFile};
use geocell::coord::{viewport_around, GeoPoint, ViewportBounds};
use geocell::logging::{self, LoggingGuard};

use crate::error::CliError;

/// Global options every command can see.
pub struct Context {
    config_path: Option<PathBuf>,
    verbose: bool,
}

impl Context {
    pub fn new(config_path: Option<PathBuf>, verbose: bool) -> Self {
        Self {
            config_path,
            verbose,
        }
    }

    /// `--config` if given, else ~/.geocell/config.ini.
    pub fn config_path(&self) -> PathBuf {
        self.config_path.clone().unwrap_or_else(config_file_path)
    }

    /// Loads the config file, falling back to defaults if it is missing.
    pub fn load_config(&self) -> Result<ConfigFile, CliError> {
        Ok(ConfigFile::load_from(&self.config_path())?)
    }

    /// Starts file and stderr logging as configured.
    pub fn init_logging(&self, config: &ConfigFile) -> Result<LoggingGuard, CliError> {
        let level = if self.verbose { "debug" } else { "info" };
        logging::init_logging_with_level(&config.logging.directory, &config.logging.file, level)
            .map_err(|e| CliError::LoggingInit(e.to_string()))
    }
}

/// How the viewport is given on the command line.
#[derive(Debug, Args)]
pub struct ViewportArgs {
    /// Explicit bounds as south,west,north,east
    #[arg(
        long,
        value_name = "S,W,N,E",
        value_parser = parse_bbox,
        allow_hyphen_values = true,
        conflicts_with_all = ["lat", "lon"]
    )]
    pub bbox: Option<ViewportBounds>,

    /// Map centre latitude (default from config)
    #[arg(long, allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Map centre longitude (default from config)
    #[arg(long, allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// Zoom level (default from config)
    #[arg(long)]
    pub zoom: Option<u8>,

    /// Map width in pixels
    #[arg(long, default_value_t = 1280)]
    pub width: u32,

    /// Map height in pixels
    #[arg(long, default_value_t = 800)]
    pub height: u32,
}

impl ViewportArgs {
    /// Resolves the viewport and zoom, filling gaps from `config`.
    pub fn resolve(&self, config: &ConfigFile) -> Result<(ViewportBounds, u8), CliError> {
        let zoom = self.zoom.unwrap_or(config.map.zoom);

        if let Some(bounds) = self.bbox {
            return Ok((bounds, zoom));
        }

        let lat = self.lat.unwrap_or(config.map.latitude);
        let lon = self.lon.unwrap_or(config.map.longitude);
        let center = GeoPoint::new(lat, lon).map_err(|e| CliError::InvalidInput(e.to_string()))?;
        let bounds = viewport_around(center, zoom, self.width, self.height)
            .map_err(|e| CliError::InvalidInput(e.to_string()))?;
        Ok((bounds, zoom))
    }
}

/// Parses `south,west,north,east`.
pub fn parse_bbox(s: &str) -> Result<ViewportBounds, String> {
    let parts: Vec<f64> = s
        .split(',')
        .map(|p| p.trim().parse::<f64>())
        .collect::<Result<_, _>>()
        .map_err(|e| format!("invalid number in bbox: {}", e))?;

    match parts.as_slice() {
        [south, west, north, east] => {
            ViewportBounds::from_edges(*south, *west, *north, *east).map_err(|e| e.to_string())
        }
        _ => Err(format!(
            "expected 4 comma-separated values (south,west,north,east), got {}",
            parts.len()
        )),
    }
}

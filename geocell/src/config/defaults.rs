//! Default values for every configuration setting.

use std::path::PathBuf;

use super::settings::{ActiveSettings, ConfigFile, LoggingSettings, MapSettings, OverlaySettings};
use crate::active::SEED_CELL;
use crate::grid::CoverageStrategy;
use crate::guard::DEFAULT_MAX_CELLS;
use crate::overlay::{GEOHASH_PRECISION, MIN_ZOOM_FOR_OVERLAY};
use crate::provider::DEFAULT_TILE_PROVIDER;
use crate::style::{FillStyle, Theme};

/// Sofia, used when the host has no better idea where to look.
pub const DEFAULT_LATITUDE: f64 = 42.6977;
pub const DEFAULT_LONGITUDE: f64 = 23.3219;
pub const DEFAULT_ZOOM: u8 = 18;

pub const DEFAULT_PRECISION: u8 = GEOHASH_PRECISION;
pub const DEFAULT_MIN_ZOOM: u8 = MIN_ZOOM_FOR_OVERLAY;
pub const DEFAULT_ACTIVE_CELLS: &str = SEED_CELL;

pub const DEFAULT_LOG_DIRECTORY: &str = "logs";
pub const DEFAULT_LOG_FILE: &str = "geocell.log";

// Keeps the guard meaningful; larger caps make the map unusable anyway.
pub const MAX_CELLS_LIMIT: usize = 100_000;

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            map: MapSettings::default(),
            overlay: OverlaySettings::default(),
            active: ActiveSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            latitude: DEFAULT_LATITUDE,
            longitude: DEFAULT_LONGITUDE,
            zoom: DEFAULT_ZOOM,
            tile_provider: DEFAULT_TILE_PROVIDER.to_string(),
            theme: Theme::default(),
        }
    }
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            max_cells: DEFAULT_MAX_CELLS,
            min_zoom: DEFAULT_MIN_ZOOM,
            coverage: CoverageStrategy::default(),
            fill: FillStyle::default(),
            debug_probe: None,
        }
    }
}

impl Default for ActiveSettings {
    fn default() -> Self {
        Self {
            cells: DEFAULT_ACTIVE_CELLS.to_string(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_LOG_DIRECTORY),
            file: DEFAULT_LOG_FILE.to_string(),
        }
    }
}

//! Settings structs, one per `[section]` of the INI file.
//!
//! Plain data; parsing lives in [`super::parser`], serialization in
//! [`super::writer`].

use std::path::PathBuf;

use crate::geohash::CellCode;
use crate::grid::CoverageStrategy;
use crate::style::{FillStyle, Theme};

/// Complete configuration loaded from config.ini.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    pub map: MapSettings,
    pub overlay: OverlaySettings,
    pub active: ActiveSettings,
    pub logging: LoggingSettings,
}

/// Where the map opens and what it looks like.
#[derive(Debug, Clone, PartialEq)]
pub struct MapSettings {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: u8,
    /// Id from the provider catalog
    pub tile_provider: String,
    pub theme: Theme,
}

/// Overlay pipeline tuning.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlaySettings {
    pub precision: u8,
    pub max_cells: usize,
    pub min_zoom: u8,
    pub coverage: CoverageStrategy,
    pub fill: FillStyle,
    /// Cell to report presence of on every recompute
    pub debug_probe: Option<CellCode>,
}

/// Seed active set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSettings {
    /// Comma-separated cell codes, kept as written
    pub cells: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    pub directory: PathBuf,
    pub file: String,
}

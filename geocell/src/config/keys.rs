//! Configuration key access and validation.
//!
//! Type-safe get/set of configuration values by `section.key` name, used by
//! `geocell config get|set|list`.

use std::str::FromStr;
use thiserror::Error;

use super::parser::{
    expand_tilde, is_hex_color, parse_border_weight, parse_latitude, parse_longitude,
    parse_max_cells, parse_opacity, parse_precision, parse_probe, parse_zoom,
};
use super::settings::ConfigFile;
use crate::active::ActiveSet;
use crate::provider;

/// Errors that can occur when getting or setting configuration values.
#[derive(Debug, Error)]
pub enum ConfigKeyError {
    #[error("Unknown configuration key '{0}'")]
    UnknownKey(String),

    #[error("Invalid value for {key}: {reason}")]
    ValidationFailed { key: String, reason: String },
}

/// Supported configuration keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    // Map settings
    MapLatitude,
    MapLongitude,
    MapZoom,
    MapTileProvider,
    MapTheme,

    // Overlay settings
    OverlayPrecision,
    OverlayMaxCells,
    OverlayMinZoom,
    OverlayCoverage,
    OverlayFillColor,
    OverlayFillOpacity,
    OverlayBorderWeight,
    OverlayDebugProbe,

    ActiveCells,

    // Logging settings
    LoggingDirectory,
    LoggingFile,
}

const ALL_KEYS: &[ConfigKey] = &[
    ConfigKey::MapLatitude,
    ConfigKey::MapLongitude,
    ConfigKey::MapZoom,
    ConfigKey::MapTileProvider,
    ConfigKey::MapTheme,
    ConfigKey::OverlayPrecision,
    ConfigKey::OverlayMaxCells,
    ConfigKey::OverlayMinZoom,
    ConfigKey::OverlayCoverage,
    ConfigKey::OverlayFillColor,
    ConfigKey::OverlayFillOpacity,
    ConfigKey::OverlayBorderWeight,
    ConfigKey::OverlayDebugProbe,
    ConfigKey::ActiveCells,
    ConfigKey::LoggingDirectory,
    ConfigKey::LoggingFile,
];

impl FromStr for ConfigKey {
    type Err = ConfigKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ALL_KEYS
            .iter()
            .copied()
            .find(|key| key.name() == wanted)
            .ok_or_else(|| ConfigKeyError::UnknownKey(s.to_string()))
    }
}

impl ConfigKey {
    /// Canonical key name (e.g., "overlay.max_cells").
    pub fn name(&self) -> &'static str {
        match self {
            ConfigKey::MapLatitude => "map.latitude",
            ConfigKey::MapLongitude => "map.longitude",
            ConfigKey::MapZoom => "map.zoom",
            ConfigKey::MapTileProvider => "map.tile_provider",
            ConfigKey::MapTheme => "map.theme",
            ConfigKey::OverlayPrecision => "overlay.precision",
            ConfigKey::OverlayMaxCells => "overlay.max_cells",
            ConfigKey::OverlayMinZoom => "overlay.min_zoom",
            ConfigKey::OverlayCoverage => "overlay.coverage",
            ConfigKey::OverlayFillColor => "overlay.fill_color",
            ConfigKey::OverlayFillOpacity => "overlay.fill_opacity",
            ConfigKey::OverlayBorderWeight => "overlay.border_weight",
            ConfigKey::OverlayDebugProbe => "overlay.debug_probe",
            ConfigKey::ActiveCells => "active.cells",
            ConfigKey::LoggingDirectory => "logging.directory",
            ConfigKey::LoggingFile => "logging.file",
        }
    }

    /// Section name (e.g., "overlay").
    pub fn section(&self) -> &'static str {
        self.name().split('.').next().unwrap_or("")
    }

    /// Key name within the section (e.g., "max_cells").
    pub fn key_name(&self) -> &'static str {
        self.name().split('.').nth(1).unwrap_or(self.name())
    }

    /// Current value as a string.
    pub fn get(&self, config: &ConfigFile) -> String {
        match self {
            ConfigKey::MapLatitude => config.map.latitude.to_string(),
            ConfigKey::MapLongitude => config.map.longitude.to_string(),
            ConfigKey::MapZoom => config.map.zoom.to_string(),
            ConfigKey::MapTileProvider => config.map.tile_provider.clone(),
            ConfigKey::MapTheme => config.map.theme.to_string(),
            ConfigKey::OverlayPrecision => config.overlay.precision.to_string(),
            ConfigKey::OverlayMaxCells => config.overlay.max_cells.to_string(),
            ConfigKey::OverlayMinZoom => config.overlay.min_zoom.to_string(),
            ConfigKey::OverlayCoverage => config.overlay.coverage.to_string(),
            ConfigKey::OverlayFillColor => config.overlay.fill.fill_color.clone(),
            ConfigKey::OverlayFillOpacity => config.overlay.fill.fill_opacity.to_string(),
            ConfigKey::OverlayBorderWeight => config.overlay.fill.border_weight.to_string(),
            ConfigKey::OverlayDebugProbe => config
                .overlay
                .debug_probe
                .as_ref()
                .map(|c| c.to_string())
                .unwrap_or_default(),
            ConfigKey::ActiveCells => config.active.cells.clone(),
            ConfigKey::LoggingDirectory => config.logging.directory.display().to_string(),
            ConfigKey::LoggingFile => config.logging.file.clone(),
        }
    }

    /// Set a value, validating it first.
    pub fn set(&self, config: &mut ConfigFile, value: &str) -> Result<(), ConfigKeyError> {
        self.validate(value)?;
        self.apply(config, value.trim());
        Ok(())
    }

    /// Writes an already validated value. Values that fail to parse leave the
    /// field unchanged.
    fn apply(&self, config: &mut ConfigFile, value: &str) {
        match self {
            ConfigKey::MapLatitude => {
                if let Some(v) = parse_latitude(value) {
                    config.map.latitude = v;
                }
            }
            ConfigKey::MapLongitude => {
                if let Some(v) = parse_longitude(value) {
                    config.map.longitude = v;
                }
            }
            ConfigKey::MapZoom => {
                if let Some(v) = parse_zoom(value) {
                    config.map.zoom = v;
                }
            }
            ConfigKey::MapTileProvider => {
                config.map.tile_provider = value.to_lowercase();
            }
            ConfigKey::MapTheme => {
                if let Ok(v) = value.parse() {
                    config.map.theme = v;
                }
            }
            ConfigKey::OverlayPrecision => {
                if let Some(v) = parse_precision(value) {
                    config.overlay.precision = v;
                }
            }
            ConfigKey::OverlayMaxCells => {
                if let Some(v) = parse_max_cells(value) {
                    config.overlay.max_cells = v;
                }
            }
            ConfigKey::OverlayMinZoom => {
                if let Some(v) = parse_zoom(value) {
                    config.overlay.min_zoom = v;
                }
            }
            ConfigKey::OverlayCoverage => {
                if let Ok(v) = value.parse() {
                    config.overlay.coverage = v;
                }
            }
            ConfigKey::OverlayFillColor => {
                config.overlay.fill.fill_color = value.to_lowercase();
            }
            ConfigKey::OverlayFillOpacity => {
                if let Some(v) = parse_opacity(value) {
                    config.overlay.fill.fill_opacity = v;
                }
            }
            ConfigKey::OverlayBorderWeight => {
                if let Some(v) = parse_border_weight(value) {
                    config.overlay.fill.border_weight = v;
                }
            }
            ConfigKey::OverlayDebugProbe => {
                if let Ok(v) = parse_probe(value) {
                    config.overlay.debug_probe = v;
                }
            }
            ConfigKey::ActiveCells => {
                config.active.cells = value.to_string();
            }
            ConfigKey::LoggingDirectory => {
                config.logging.directory = expand_tilde(value);
            }
            ConfigKey::LoggingFile => {
                config.logging.file = value.to_string();
            }
        }
    }

    /// Validate a value for this key.
    pub fn validate(&self, value: &str) -> Result<(), ConfigKeyError> {
        self.rule()
            .is_satisfied_by(value.trim())
            .map_err(|reason| ConfigKeyError::ValidationFailed {
                key: self.name().to_string(),
                reason,
            })
    }

    fn rule(&self) -> Box<dyn ValueRule> {
        match self {
            ConfigKey::MapLatitude => Box::new(CheckRule::new(
                |v| parse_latitude(v).is_some(),
                "must be between -90 and 90",
            )),
            ConfigKey::MapLongitude => Box::new(CheckRule::new(
                |v| parse_longitude(v).is_some(),
                "must be between -180 and 180",
            )),
            ConfigKey::MapZoom | ConfigKey::OverlayMinZoom => Box::new(CheckRule::new(
                |v| parse_zoom(v).is_some(),
                "must be an integer from 0 to 22",
            )),
            ConfigKey::MapTileProvider => Box::new(CheckRule::new(
                |v| provider::find_provider(v).is_ok(),
                "must be a provider id listed by `geocell providers`",
            )),
            ConfigKey::MapTheme => Box::new(OneOfRule::new(&["light", "dark"])),
            ConfigKey::OverlayPrecision => Box::new(CheckRule::new(
                |v| parse_precision(v).is_some(),
                "must be an integer from 1 to 12",
            )),
            ConfigKey::OverlayMaxCells => Box::new(CheckRule::new(
                |v| parse_max_cells(v).is_some(),
                "must be a positive integer no larger than 100000",
            )),
            ConfigKey::OverlayCoverage => Box::new(OneOfRule::new(&["lattice", "exact"])),
            ConfigKey::OverlayFillColor => Box::new(CheckRule::new(
                is_hex_color,
                "expected a hex colour like '#3388ff'",
            )),
            ConfigKey::OverlayFillOpacity => Box::new(CheckRule::new(
                |v| parse_opacity(v).is_some(),
                "must be between 0.0 and 1.0",
            )),
            ConfigKey::OverlayBorderWeight => Box::new(CheckRule::new(
                |v| parse_border_weight(v).is_some(),
                "must be a non-negative number",
            )),
            ConfigKey::OverlayDebugProbe => Box::new(CheckRule::new(
                |v| parse_probe(v).is_ok(),
                "must be empty or a geohash cell code",
            )),
            ConfigKey::ActiveCells => Box::new(CheckRule::new(
                |v| ActiveSet::parse_list(v).is_ok(),
                "must be a comma-separated list of geohash cell codes",
            )),
            ConfigKey::LoggingDirectory | ConfigKey::LoggingFile => Box::new(NonEmptyRule),
        }
    }

    /// All supported keys, in file order.
    pub fn all() -> &'static [ConfigKey] {
        ALL_KEYS
    }
}

/// Value validation rule.
trait ValueRule {
    /// `Err(reason)` if the value is not acceptable.
    fn is_satisfied_by(&self, value: &str) -> Result<(), String>;
}

/// Value must be one of a fixed set of options (case-insensitive).
struct OneOfRule {
    options: &'static [&'static str],
}

impl OneOfRule {
    fn new(options: &'static [&'static str]) -> Self {
        Self { options }
    }
}

impl ValueRule for OneOfRule {
    fn is_satisfied_by(&self, value: &str) -> Result<(), String> {
        let lower = value.to_lowercase();
        if self.options.iter().any(|opt| *opt == lower) {
            Ok(())
        } else {
            Err(format!("must be one of: {}", self.options.join(", ")))
        }
    }
}

/// Value must pass a predicate.
struct CheckRule {
    check: fn(&str) -> bool,
    reason: &'static str,
}

impl CheckRule {
    fn new(check: fn(&str) -> bool, reason: &'static str) -> Self {
        Self { check, reason }
    }
}

impl ValueRule for CheckRule {
    fn is_satisfied_by(&self, value: &str) -> Result<(), String> {
        if (self.check)(value) {
            Ok(())
        } else {
            Err(self.reason.to_string())
        }
    }
}

struct NonEmptyRule;

impl ValueRule for NonEmptyRule {
    fn is_satisfied_by(&self, value: &str) -> Result<(), String> {
        if value.is_empty() {
            Err("must not be empty".to_string())
        } else {
            Ok(())
        }
    }
}

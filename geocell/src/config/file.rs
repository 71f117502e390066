//! Configuration file handling for ~/.geocell/config.ini.
//!
//! Settings structs live in [`super::settings`], defaults in
//! [`super::defaults`], parsing in [`super::parser`] and serialization in
//! [`super::writer`].

use ini::Ini;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::overlay::OverlayConfig;
use super::settings::ConfigFile;
use crate::active::ActiveSet;
use crate::coord::GeoPoint;
use crate::geohash::GeohashError;

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] ini::Error),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid configuration: {section}.{key} = '{value}' - {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },

    #[error("Failed to create config directory: {0}")]
    DirectoryError(std::io::Error),
}

impl ConfigFile {
    /// Load from a specific path, falling back to defaults if it is absent.
    pub fn load_from(path: &Path) -> Result<Self, ConfigFileError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path)?;
        super::parser::parse_ini(&ini)
    }

    /// Save to a specific path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigFileError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(ConfigFileError::DirectoryError)?;
            }
        }

        let content = super::writer::to_config_string(self);
        std::fs::write(path, content).map_err(|e| ConfigFileError::WriteError(e.to_string()))
    }

    /// Write a default config file at `path` unless one is already there.
    pub fn ensure_exists_at(path: &Path) -> Result<PathBuf, ConfigFileError> {
        if !path.exists() {
            Self::default().save_to(path)?;
        }
        Ok(path.to_path_buf())
    }

    /// Runtime overlay settings.
    pub fn overlay_config(&self) -> OverlayConfig {
        let overlay = &self.overlay;
        OverlayConfig::new()
            .with_precision(overlay.precision)
            .with_max_cells(overlay.max_cells)
            .with_min_zoom(overlay.min_zoom)
            .with_coverage(overlay.coverage)
            .with_fill(overlay.fill.clone())
            .with_debug_probe(overlay.debug_probe.clone())
    }

    /// Seed active set from `[active] cells`.
    pub fn active_set(&self) -> Result<ActiveSet, GeohashError> {
        ActiveSet::parse_list(&self.active.cells)
    }

    /// Map centre from `[map]`.
    pub fn center(&self) -> GeoPoint {
        GeoPoint::clamped(self.map.latitude, self.map.longitude)
    }
}

/// Get the path to the config directory (~/.geocell).
pub fn config_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".geocell")
}

/// Get the path to the config file (~/.geocell/config.ini).
pub fn config_file_path() -> PathBuf {
    config_directory().join("config.ini")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_LATITUDE;
    use crate::grid::CoverageStrategy;

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();
        assert_eq!(config.map.latitude, DEFAULT_LATITUDE);
        assert_eq!(config.map.zoom, 18);
        assert_eq!(config.map.tile_provider, "cartodb-voyager");
        assert_eq!(config.overlay.precision, 8);
        assert_eq!(config.overlay.max_cells, 3000);
        assert_eq!(config.active.cells, "sx8d9x3s");
        assert_eq!(config.logging.file, "geocell.log");
    }

    #[test]
    fn test_load_nonexistent_returns_defaults() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config = ConfigFile::load_from(&temp_dir.path().join("nonexistent.ini")).unwrap();
        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.ini");

        let mut config = ConfigFile::default();
        config.overlay.coverage = CoverageStrategy::Exact;
        config.overlay.max_cells = 1200;
        config.save_to(&path).unwrap();

        let loaded = ConfigFile::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_ensure_exists_at_keeps_existing_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("config.ini");
        std::fs::write(&path, "[map]\nzoom = 20\n").unwrap();

        ConfigFile::ensure_exists_at(&path).unwrap();
        assert_eq!(ConfigFile::load_from(&path).unwrap().map.zoom, 20);
    }

    #[test]
    fn test_invalid_file_reports_key() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("config.ini");
        std::fs::write(&path, "[overlay]\nmax_cells = lots\n").unwrap();

        let err = ConfigFile::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("overlay.max_cells"));
    }

    #[test]
    fn test_overlay_config_carries_settings() {
        let mut config = ConfigFile::default();
        config.overlay.min_zoom = 16;
        config.overlay.fill.fill_opacity = 0.2;
        let overlay = config.overlay_config();
        assert_eq!(overlay.min_zoom(), 16);
        assert_eq!(overlay.fill().fill_opacity, 0.2);
        assert_eq!(overlay.max_cells(), 3000);
    }

    #[test]
    fn test_active_set_from_config() {
        let mut config = ConfigFile::default();
        assert!(config.active_set().unwrap().contains("sx8d9x3s"));

        config.active.cells = String::new();
        assert!(config.active_set().unwrap().is_empty());
    }

    #[test]
    fn test_config_path_under_home_dir() {
        let path = config_file_path();
        assert!(path.ends_with(".geocell/config.ini"));
    }
}

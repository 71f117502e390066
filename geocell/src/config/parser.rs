//! INI parsing: `Ini` → `ConfigFile`.
//!
//! The single place where INI key names are mapped to struct fields.

use ini::Ini;
use std::path::PathBuf;

use super::defaults::MAX_CELLS_LIMIT;
use super::file::ConfigFileError;
use super::settings::ConfigFile;
use crate::active::ActiveSet;
use crate::coord::{MAX_LAT, MAX_LON, MAX_ZOOM, MIN_LAT, MIN_LON};
use crate::geohash::{self, CellCode};
use crate::provider;

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [map] section
    if let Some(section) = ini.section(Some("map")) {
        if let Some(v) = section.get("latitude") {
            config.map.latitude = parse_latitude(v)
                .ok_or_else(|| invalid("map", "latitude", v, "must be between -90 and 90"))?;
        }
        if let Some(v) = section.get("longitude") {
            config.map.longitude = parse_longitude(v)
                .ok_or_else(|| invalid("map", "longitude", v, "must be between -180 and 180"))?;
        }
        if let Some(v) = section.get("zoom") {
            config.map.zoom = parse_zoom(v)
                .ok_or_else(|| invalid("map", "zoom", v, "must be an integer from 0 to 22"))?;
        }
        if let Some(v) = section.get("tile_provider") {
            let v = v.trim().to_lowercase();
            if provider::find_provider(&v).is_err() {
                return Err(invalid("map", "tile_provider", &v, &provider_reason()));
            }
            config.map.tile_provider = v;
        }
        if let Some(v) = section.get("theme") {
            config.map.theme = v
                .parse()
                .map_err(|reason: String| invalid("map", "theme", v, &reason))?;
        }
    }

    // [overlay] section
    if let Some(section) = ini.section(Some("overlay")) {
        if let Some(v) = section.get("precision") {
            config.overlay.precision = parse_precision(v).ok_or_else(|| {
                invalid("overlay", "precision", v, "must be an integer from 1 to 12")
            })?;
        }
        if let Some(v) = section.get("max_cells") {
            config.overlay.max_cells = parse_max_cells(v).ok_or_else(|| {
                invalid(
                    "overlay",
                    "max_cells",
                    v,
                    "must be a positive integer no larger than 100000",
                )
            })?;
        }
        if let Some(v) = section.get("min_zoom") {
            config.overlay.min_zoom = parse_zoom(v).ok_or_else(|| {
                invalid("overlay", "min_zoom", v, "must be an integer from 0 to 22")
            })?;
        }
        if let Some(v) = section.get("coverage") {
            config.overlay.coverage = v
                .parse()
                .map_err(|reason: String| invalid("overlay", "coverage", v, &reason))?;
        }
        if let Some(v) = section.get("fill_color") {
            if !is_hex_color(v.trim()) {
                return Err(invalid(
                    "overlay",
                    "fill_color",
                    v,
                    "expected a hex colour like '#3388ff'",
                ));
            }
            config.overlay.fill.fill_color = v.trim().to_lowercase();
        }
        if let Some(v) = section.get("fill_opacity") {
            config.overlay.fill.fill_opacity = parse_opacity(v).ok_or_else(|| {
                invalid("overlay", "fill_opacity", v, "must be between 0.0 and 1.0")
            })?;
        }
        if let Some(v) = section.get("border_weight") {
            config.overlay.fill.border_weight = parse_border_weight(v).ok_or_else(|| {
                invalid("overlay", "border_weight", v, "must be a non-negative number")
            })?;
        }
        if let Some(v) = section.get("debug_probe") {
            config.overlay.debug_probe = parse_probe(v)
                .map_err(|e| invalid("overlay", "debug_probe", v, &e.to_string()))?;
        }
    }

    // [active] section
    if let Some(section) = ini.section(Some("active")) {
        if let Some(v) = section.get("cells") {
            ActiveSet::parse_list(v)
                .map_err(|e| invalid("active", "cells", v, &e.to_string()))?;
            config.active.cells = v.trim().to_string();
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("directory") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.directory = expand_tilde(v);
            }
        }
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.file = v.to_string();
            }
        }
    }

    Ok(config)
}

fn invalid(section: &str, key: &str, value: &str, reason: &str) -> ConfigFileError {
    ConfigFileError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

pub(super) fn provider_reason() -> String {
    let ids: Vec<&str> = provider::providers().iter().map(|p| p.id).collect();
    format!("must be one of: {}", ids.join(", "))
}

pub(super) fn parse_latitude(v: &str) -> Option<f64> {
    v.trim()
        .parse::<f64>()
        .ok()
        .filter(|lat| (MIN_LAT..=MAX_LAT).contains(lat))
}

pub(super) fn parse_longitude(v: &str) -> Option<f64> {
    v.trim()
        .parse::<f64>()
        .ok()
        .filter(|lon| (MIN_LON..=MAX_LON).contains(lon))
}

pub(super) fn parse_zoom(v: &str) -> Option<u8> {
    v.trim().parse::<u8>().ok().filter(|z| *z <= MAX_ZOOM)
}

pub(super) fn parse_precision(v: &str) -> Option<u8> {
    v.trim()
        .parse::<u8>()
        .ok()
        .and_then(|p| geohash::validate_precision(p).ok())
}

pub(super) fn parse_max_cells(v: &str) -> Option<usize> {
    v.trim()
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=MAX_CELLS_LIMIT).contains(n))
}

pub(super) fn parse_opacity(v: &str) -> Option<f64> {
    v.trim()
        .parse::<f64>()
        .ok()
        .filter(|o| (0.0..=1.0).contains(o))
}

pub(super) fn parse_border_weight(v: &str) -> Option<f64> {
    v.trim()
        .parse::<f64>()
        .ok()
        .filter(|w| w.is_finite() && *w >= 0.0)
}

/// Empty means no probe.
pub(super) fn parse_probe(v: &str) -> Result<Option<CellCode>, geohash::GeohashError> {
    let v = v.trim();
    if v.is_empty() {
        Ok(None)
    } else {
        CellCode::parse(v).map(Some)
    }
}

/// `#rgb` or `#rrggbb`.
pub(super) fn is_hex_color(v: &str) -> bool {
    match v.strip_prefix('#') {
        Some(hex) => {
            (hex.len() == 3 || hex.len() == 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}

pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

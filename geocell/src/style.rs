//! Overlay theming.
//!
//! Border colour is a two-way decision: dark maps, and basemaps that read as
//! pale under the overlay, get a light grey border; everything else gets a
//! dark grey one. Fill colour, opacity and border weight are fixed per
//! configuration.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::provider;

/// Border for dark themes and pale basemaps.
pub const LIGHT_BORDER_COLOR: &str = "#a0a0a0";
/// Border for everything else.
pub const DARK_BORDER_COLOR: &str = "#404040";

pub const DEFAULT_FILL_COLOR: &str = "#3388ff";
pub const DEFAULT_FILL_OPACITY: f64 = 0.5;
pub const DEFAULT_BORDER_WEIGHT: f64 = 1.0;

/// Map colour theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!(
                "unknown theme '{}' (expected 'light' or 'dark')",
                other
            )),
        }
    }
}

/// Picks the cell border colour for a theme and basemap.
///
/// Unknown provider ids are treated like any other non-pale basemap.
pub fn border_color(theme: Theme, tile_provider_id: &str) -> &'static str {
    let pale_basemap = provider::find_provider(tile_provider_id)
        .map(|p| p.prefers_light_border)
        .unwrap_or(false);

    if theme == Theme::Dark || pale_basemap {
        LIGHT_BORDER_COLOR
    } else {
        DARK_BORDER_COLOR
    }
}

/// Configurable fill parameters shared by every shape in a layer.
#[derive(Debug, Clone, PartialEq)]
pub struct FillStyle {
    pub fill_color: String,
    pub fill_opacity: f64,
    pub border_weight: f64,
}

impl Default for FillStyle {
    fn default() -> Self {
        Self {
            fill_color: DEFAULT_FILL_COLOR.to_string(),
            fill_opacity: DEFAULT_FILL_OPACITY,
            border_weight: DEFAULT_BORDER_WEIGHT,
        }
    }
}

/// Fully resolved style for one overlay layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayStyle {
    pub border_color: String,
    pub border_weight: f64,
    pub fill_color: String,
    pub fill_opacity: f64,
}

impl OverlayStyle {
    /// Resolves the style for the given theme and basemap.
    pub fn resolve(theme: Theme, tile_provider_id: &str, fill: &FillStyle) -> Self {
        Self {
            border_color: border_color(theme, tile_provider_id).to_string(),
            border_weight: fill.border_weight,
            fill_color: fill.fill_color.clone(),
            fill_opacity: fill.fill_opacity,
        }
    }
}

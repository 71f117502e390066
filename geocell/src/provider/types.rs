//! Provider types

use std::fmt;

use crate::style::Theme;

/// Errors that can occur when looking up a provider.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderError {
    /// No provider with this id exists in the catalog
    Unknown(String),
    /// Zoom level outside what the provider serves
    UnsupportedZoom { provider: String, zoom: u8 },
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Unknown(id) => write!(f, "Invalid tile provider: {}", id),
            ProviderError::UnsupportedZoom { provider, zoom } => {
                write!(f, "Zoom level {} not supported by {}", zoom, provider)
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// One raster tile endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileSource {
    /// URL template with `{s}`, `{z}`, `{x}`, `{y}` and optional `{r}`
    pub url: &'static str,
    pub attribution: &'static str,
    pub max_zoom: u8,
}

impl TileSource {
    /// Expands the URL template for one tile.
    ///
    /// `{s}` becomes subdomain `a` and `{r}` (retina suffix) is dropped.
    pub fn tile_url(&self, zoom: u8, x: u32, y: u32) -> String {
        self.url
            .replace("{s}", "a")
            .replace("{z}", &zoom.to_string())
            .replace("{x}", &x.to_string())
            .replace("{y}", &y.to_string())
            .replace("{r}", "")
    }
}

/// A basemap with light and dark variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileProvider {
    /// Stable identifier, e.g. `cartodb-voyager`
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    pub light: TileSource,
    pub dark: TileSource,
    /// Whether overlay borders should use the light grey even on the
    /// light theme
    pub prefers_light_border: bool,
}

impl TileProvider {
    /// Tile source for a theme.
    pub fn source(&self, theme: Theme) -> &TileSource {
        match theme {
            Theme::Light => &self.light,
            Theme::Dark => &self.dark,
        }
    }

    /// Checks that `zoom` lies within `MIN_TILE_ZOOM..=max_zoom` for `theme`.
    pub fn check_zoom(&self, zoom: u8, theme: Theme) -> Result<(), ProviderError> {
        let max = self.source(theme).max_zoom;
        if zoom < super::MIN_TILE_ZOOM || zoom > max {
            return Err(ProviderError::UnsupportedZoom {
                provider: self.name.to_string(),
                zoom,
            });
        }
        Ok(())
    }
}

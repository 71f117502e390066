//! Built-in provider catalog.

use super::types::{ProviderError, TileProvider, TileSource};

/// Provider selected when nothing else is configured.
pub const DEFAULT_TILE_PROVIDER: &str = "cartodb-voyager";

/// Lowest zoom any basemap is shown at.
pub const MIN_TILE_ZOOM: u8 = 3;

const OSM_ATTRIBUTION: &str = "\u{a9} OpenStreetMap contributors";
const HOT_ATTRIBUTION: &str = "\u{a9} OpenStreetMap contributors, Tiles courtesy of Humanitarian OpenStreetMap Team";
const CARTO_ATTRIBUTION: &str = "\u{a9} OpenStreetMap contributors \u{a9} CARTO";
const TOPO_ATTRIBUTION: &str = "Map data: \u{a9} OpenStreetMap contributors, SRTM | Map style: \u{a9} OpenTopoMap (CC-BY-SA)";

const OSM_HOT: TileSource = TileSource {
    url: "https://{s}.tile.openstreetmap.fr/hot/{z}/{x}/{y}.png",
    attribution: HOT_ATTRIBUTION,
    max_zoom: 19,
};

const OSM_STANDARD: TileSource = TileSource {
    url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
    attribution: OSM_ATTRIBUTION,
    max_zoom: 19,
};

const CARTO_VOYAGER: TileSource = TileSource {
    url: "https://{s}.basemaps.cartocdn.com/rastertiles/voyager/{z}/{x}/{y}{r}.png",
    attribution: CARTO_ATTRIBUTION,
    max_zoom: 20,
};

const CARTO_POSITRON: TileSource = TileSource {
    url: "https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}{r}.png",
    attribution: CARTO_ATTRIBUTION,
    max_zoom: 20,
};

const CARTO_DARK: TileSource = TileSource {
    url: "https://{s}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}{r}.png",
    attribution: CARTO_ATTRIBUTION,
    max_zoom: 20,
};

const OPEN_TOPO: TileSource = TileSource {
    url: "https://{s}.tile.opentopomap.org/{z}/{x}/{y}.png",
    attribution: TOPO_ATTRIBUTION,
    max_zoom: 17,
};

// OSM and OpenTopoMap have no dark rendering; they reuse the light tiles.
static TILE_PROVIDERS: [TileProvider; 5] = [
    TileProvider {
        id: "osm-hot",
        name: "OpenStreetMap HOT",
        light: OSM_HOT,
        dark: OSM_HOT,
        prefers_light_border: false,
    },
    TileProvider {
        id: "osm-standard",
        name: "OpenStreetMap Standard",
        light: OSM_STANDARD,
        dark: OSM_STANDARD,
        prefers_light_border: false,
    },
    TileProvider {
        id: "cartodb-voyager",
        name: "CartoDB Voyager",
        light: CARTO_VOYAGER,
        dark: CARTO_DARK,
        prefers_light_border: true,
    },
    TileProvider {
        id: "cartodb-positron",
        name: "CartoDB Positron",
        light: CARTO_POSITRON,
        dark: CARTO_DARK,
        prefers_light_border: true,
    },
    TileProvider {
        id: "opentopomap",
        name: "OpenTopoMap",
        light: OPEN_TOPO,
        dark: OPEN_TOPO,
        prefers_light_border: false,
    },
];

/// All providers in catalog order.
pub fn providers() -> &'static [TileProvider] {
    &TILE_PROVIDERS
}

/// Looks up a provider by id.
pub fn find_provider(id: &str) -> Result<&'static TileProvider, ProviderError> {
    TILE_PROVIDERS
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| ProviderError::Unknown(id.to_string()))
}

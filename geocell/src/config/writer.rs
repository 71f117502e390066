//! INI serialization: `ConfigFile` → commented INI string.

use std::path::Path;

use super::settings::ConfigFile;

/// Convert a `ConfigFile` to the commented INI written to `config.ini`.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    let debug_probe = config
        .overlay
        .debug_probe
        .as_ref()
        .map(|c| c.as_str())
        .unwrap_or("");

    format!(
        r#"[map]
; Where the map opens (defaults to Sofia)
latitude = {}
longitude = {}
; Initial zoom level (0-22)
zoom = {}
; Basemap id, see `geocell providers`:
;   osm-hot, osm-standard, cartodb-voyager, cartodb-positron, opentopomap
tile_provider = {}
; light or dark
theme = {}

[overlay]
; Geohash precision of drawn cells (1-12)
precision = {}
; Largest number of cells enumerated before the overlay is refused
max_cells = {}
; Overlay is hidden below this zoom
min_zoom = {}
; How visible cells are found:
;   lattice - sample the viewport on a half-cell grid (default)
;   exact   - walk every cell touching the viewport
coverage = {}
; Fill applied to active cells
fill_color = {}
fill_opacity = {}
border_weight = {}
; Log whether this cell is enumerated on every recompute (empty = off)
debug_probe = {}

[active]
; Comma-separated cell codes to highlight
cells = {}

[logging]
; Log directory, relative to the working directory unless absolute
directory = {}
file = {}
"#,
        config.map.latitude,
        config.map.longitude,
        config.map.zoom,
        config.map.tile_provider,
        config.map.theme,
        config.overlay.precision,
        config.overlay.max_cells,
        config.overlay.min_zoom,
        config.overlay.coverage,
        config.overlay.fill.fill_color,
        config.overlay.fill.fill_opacity,
        config.overlay.fill.border_weight,
        debug_probe,
        config.active.cells,
        path_to_string(&config.logging.directory),
        config.logging.file,
    )
}

fn path_to_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

//! Basemap tile provider catalog
//!
//! Static descriptions of the raster basemaps the overlay can sit on. Each
//! provider has a light and a dark tile source. The overlay engine only
//! consults the catalog to pick a border colour. Hosts use the rest (URL
//! templates, attribution, zoom limits) to configure their tile layer.
//!
//! # Example
//!
//! ```
//! use geocell::provider::{find_provider, DEFAULT_TILE_PROVIDER};
//! use geocell::style::Theme;
//!
//! let provider = find_provider(DEFAULT_TILE_PROVIDER).unwrap();
//! assert_eq!(provider.name, "CartoDB Voyager");
//! assert_eq!(provider.source(Theme::Light).max_zoom, 20);
//! ```

mod catalog;
mod types;

pub use catalog::{find_provider, providers, DEFAULT_TILE_PROVIDER, MIN_TILE_ZOOM};
pub use types::{ProviderError, TileProvider, TileSource};

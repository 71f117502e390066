//! geocell - geohash grid overlay for slippy maps
//!
//! Given what a map currently shows, geocell works out which fixed-precision
//! geohash cells are visible, keeps the highlighted subset, and produces a
//! styled layer of rectangles for the map to draw. It stays out of the way
//! when zoomed out and refuses to draw when a viewport would need too many
//! cells.
//!
//! # High-Level API
//!
//! Embedders implement [`engine::MapHost`] for their map widget and feed
//! settle/theme events into an [`engine::OverlayEngine`]:
//!
//! ```
//! use geocell::active::ActiveSet;
//! use geocell::config::OverlayConfig;
//! use geocell::coord::{viewport_around, GeoPoint};
//! use geocell::engine::{OverlayEngine, StaticHost};
//! use geocell::style::Theme;
//!
//! let center = GeoPoint::new(42.66755, 23.27127)?;
//! let viewport = viewport_around(center, 18, 1280, 800)?;
//! let host = StaticHost::new(viewport, 18, Theme::Light, "cartodb-voyager");
//!
//! let mut engine = OverlayEngine::new(host, OverlayConfig::default())?;
//! engine.on_viewport_settled(&ActiveSet::seeded())?;
//! assert!(engine.host().shown().is_some());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! The building blocks ([`geohash`], [`grid`], [`guard`], [`active`]) are
//! usable on their own.

pub mod active;
pub mod config;
pub mod coord;
pub mod diagnostics;
pub mod engine;
pub mod geohash;
pub mod grid;
pub mod guard;
pub mod logging;
pub mod overlay;
pub mod provider;
pub mod style;

/// Version of the geocell library and CLI.
///
/// Synchronized across the workspace from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

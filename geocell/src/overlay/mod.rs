//! Geohash overlay rendering.
//!
//! [`OverlayRenderer`] is the engine's single entry point. Each call to
//! [`OverlayRenderer::recompute`] runs the whole pipeline from scratch:
//!
//! ```text
//! zoom gate ─► cost pre-flight ─► enumerate ─► cost guard ─► active filter ─► shapes
//! ```
//!
//! and either installs a new [`OverlayLayer`] in place of the old one, hides
//! the overlay, or (when the guard rejects) leaves the current layer alone.
//!
//! # Example
//!
//! ```
//! use geocell::active::ActiveSet;
//! use geocell::config::OverlayConfig;
//! use geocell::coord::{viewport_around, GeoPoint};
//! use geocell::overlay::{OverlayRenderer, OverlayState, RenderContext};
//! use geocell::style::Theme;
//!
//! let mut renderer = OverlayRenderer::new(OverlayConfig::default()).unwrap();
//! let center = GeoPoint::new(42.66755, 23.27127).unwrap();
//! let viewport = viewport_around(center, 18, 1280, 800).unwrap();
//! let context = RenderContext::new(18, Theme::Light, "cartodb-voyager");
//!
//! renderer.recompute(&viewport, &context, &ActiveSet::seeded()).unwrap();
//! assert_eq!(renderer.state(), OverlayState::Shown);
//! assert_eq!(renderer.layer().map(|l| l.len()), Some(1));
//! ```

pub mod export;
mod layer;
mod renderer;

pub use layer::{OverlayLayer, OverlayShape, RenderContext};
pub use renderer::{OverlayError, OverlayRenderer, OverlayState, RecomputeOutcome};

/// Cell precision the overlay draws at.
pub const GEOHASH_PRECISION: u8 = 8;

/// Below this zoom level the overlay is hidden.
pub const MIN_ZOOM_FOR_OVERLAY: u8 = 18;

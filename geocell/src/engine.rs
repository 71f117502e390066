//! Wiring between a map host and the overlay renderer.
//!
//! The host owns the live map: it reports the viewport, zoom, theme and
//! basemap, and draws or removes whatever layer the engine hands it. The
//! engine calls back into the host only after the viewport has settled or
//! the theme has changed, and never holds on to host state between calls.

use crate::active::ActiveSet;
use crate::config::OverlayConfig;
use crate::coord::ViewportBounds;
use crate::overlay::{
    OverlayError, OverlayLayer, OverlayRenderer, RecomputeOutcome, RenderContext,
};
use crate::style::Theme;

/// The map widget the overlay is drawn on.
pub trait MapHost {
    /// Bounds of the currently visible area.
    fn viewport_bounds(&self) -> ViewportBounds;

    fn zoom(&self) -> u8;

    fn theme(&self) -> Theme;

    /// Catalog id of the basemap in use.
    fn tile_provider_id(&self) -> String;

    /// Draw `layer`, replacing any overlay already shown.
    fn show_overlay(&mut self, layer: &OverlayLayer);

    /// Remove the overlay if one is shown.
    fn hide_overlay(&mut self);
}

/// Drives an [`OverlayRenderer`] from host events.
pub struct OverlayEngine<H: MapHost> {
    host: H,
    renderer: OverlayRenderer,
}

impl<H: MapHost> OverlayEngine<H> {
    pub fn new(host: H, config: OverlayConfig) -> Result<Self, OverlayError> {
        Ok(Self::with_renderer(host, OverlayRenderer::new(config)?))
    }

    /// Use a pre-built renderer, e.g. one with custom diagnostics.
    pub fn with_renderer(host: H, renderer: OverlayRenderer) -> Self {
        Self { host, renderer }
    }

    /// Call once the map has stopped moving (pan or zoom end).
    pub fn on_viewport_settled(
        &mut self,
        active: &ActiveSet,
    ) -> Result<RecomputeOutcome, OverlayError> {
        self.refresh(active)
    }

    /// Call after the host switched theme so borders are restyled.
    pub fn on_theme_changed(
        &mut self,
        active: &ActiveSet,
    ) -> Result<RecomputeOutcome, OverlayError> {
        self.refresh(active)
    }

    fn refresh(&mut self, active: &ActiveSet) -> Result<RecomputeOutcome, OverlayError> {
        let viewport = self.host.viewport_bounds();
        let context = RenderContext::new(
            self.host.zoom(),
            self.host.theme(),
            self.host.tile_provider_id(),
        );

        let outcome = self.renderer.recompute(&viewport, &context, active)?;
        match outcome {
            RecomputeOutcome::Rendered { .. } => {
                if let Some(layer) = self.renderer.layer() {
                    self.host.show_overlay(layer);
                }
            }
            RecomputeOutcome::BelowMinZoom { .. } => self.host.hide_overlay(),
            // Whatever the host is showing stays.
            RecomputeOutcome::Rejected(_) => {}
        }
        Ok(outcome)
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn renderer(&self) -> &OverlayRenderer {
        &self.renderer
    }
}

/// A host with a fixed view that remembers the last layer it was given.
///
/// Used by the CLI and handy in tests.
#[derive(Debug, Clone)]
pub struct StaticHost {
    pub viewport: ViewportBounds,
    pub zoom: u8,
    pub theme: Theme,
    pub tile_provider_id: String,
    shown: Option<OverlayLayer>,
}

impl StaticHost {
    pub fn new(
        viewport: ViewportBounds,
        zoom: u8,
        theme: Theme,
        tile_provider_id: impl Into<String>,
    ) -> Self {
        Self {
            viewport,
            zoom,
            theme,
            tile_provider_id: tile_provider_id.into(),
            shown: None,
        }
    }

    /// The layer currently drawn, if any.
    pub fn shown(&self) -> Option<&OverlayLayer> {
        self.shown.as_ref()
    }
}

impl MapHost for StaticHost {
    fn viewport_bounds(&self) -> ViewportBounds {
        self.viewport
    }

    fn zoom(&self) -> u8 {
        self.zoom
    }

    fn theme(&self) -> Theme {
        self.theme
    }

    fn tile_provider_id(&self) -> String {
        self.tile_provider_id.clone()
    }

    fn show_overlay(&mut self, layer: &OverlayLayer) {
        self.shown = Some(layer.clone());
    }

    fn hide_overlay(&mut self) {
        self.shown = None;
    }
}

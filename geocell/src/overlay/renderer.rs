//! Overlay renderer state machine.

use std::sync::Arc;

use thiserror::Error;

use super::layer::{OverlayLayer, OverlayShape, RenderContext};
use crate::active::{self, ActiveSet};
use crate::config::OverlayConfig;
use crate::coord::ViewportBounds;
use crate::diagnostics::{OverlayDiagnostics, OverlayEvent, TracingDiagnostics};
use crate::geohash::{self, GeohashError};
use crate::grid;
use crate::guard::{CapExceeded, CostGuard};
use crate::style::OverlayStyle;

/// Errors that stop a recomputation.
///
/// These leave the current layer untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OverlayError {
    #[error(transparent)]
    Geohash(#[from] GeohashError),
}

/// Whether a layer is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayState {
    Hidden,
    Shown,
}

/// What a call to [`OverlayRenderer::recompute`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecomputeOutcome {
    /// Zoom below threshold; any layer was dropped
    BelowMinZoom { zoom: u8, min_zoom: u8 },
    /// Too many cells; the previous layer (or none) is still in place
    Rejected(CapExceeded),
    /// A new layer replaced the previous one
    Rendered { cells: usize, shapes: usize },
}

/// Owns the single live overlay layer and rebuilds it on demand.
///
/// `recompute` takes `&mut self`, so one renderer never runs two
/// recomputations at once.
pub struct OverlayRenderer {
    config: OverlayConfig,
    guard: CostGuard,
    layer: Option<OverlayLayer>,
    diagnostics: Arc<dyn OverlayDiagnostics>,
}

impl OverlayRenderer {
    /// Creates a renderer that reports through `tracing`.
    ///
    /// # Errors
    ///
    /// Returns [`OverlayError::Geohash`] if the configured precision is out
    /// of range.
    pub fn new(config: OverlayConfig) -> Result<Self, OverlayError> {
        Self::with_diagnostics(config, Arc::new(TracingDiagnostics::new()))
    }

    /// Creates a renderer reporting to `diagnostics`.
    pub fn with_diagnostics(
        config: OverlayConfig,
        diagnostics: Arc<dyn OverlayDiagnostics>,
    ) -> Result<Self, OverlayError> {
        geohash::validate_precision(config.precision())?;
        Ok(Self {
            guard: CostGuard::new(config.max_cells()),
            config,
            layer: None,
            diagnostics,
        })
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    pub fn state(&self) -> OverlayState {
        if self.layer.is_some() {
            OverlayState::Shown
        } else {
            OverlayState::Hidden
        }
    }

    /// The live layer, if shown.
    pub fn layer(&self) -> Option<&OverlayLayer> {
        self.layer.as_ref()
    }

    /// Drops the live layer.
    pub fn clear(&mut self) {
        self.layer = None;
    }

    /// Rebuilds the overlay for the given viewport.
    ///
    /// `context` and `active` are read once at the start; nothing is kept
    /// from earlier calls except the layer being replaced.
    pub fn recompute(
        &mut self,
        viewport: &ViewportBounds,
        context: &RenderContext,
        active: &ActiveSet,
    ) -> Result<RecomputeOutcome, OverlayError> {
        let min_zoom = self.config.min_zoom();
        if context.zoom < min_zoom {
            self.layer = None;
            self.diagnostics.record(&OverlayEvent::Hidden {
                zoom: context.zoom,
                min_zoom,
            });
            return Ok(RecomputeOutcome::BelowMinZoom {
                zoom: context.zoom,
                min_zoom,
            });
        }

        let precision = self.config.precision();
        let coverage = self.config.coverage();

        // Refuse huge viewports before paying for the enumeration itself.
        let floor = grid::lower_bound_cell_count(viewport, precision, coverage)?;
        if let Err(exceeded) = self.guard.check_lower_bound(floor, coverage) {
            return Ok(self.reject(exceeded));
        }

        let cells = grid::enumerate_with(viewport, precision, coverage)?;
        let cells = match self.guard.check(cells) {
            Ok(cells) => cells,
            Err(exceeded) => return Ok(self.reject(exceeded)),
        };

        if let Some(probe) = self.config.debug_probe() {
            self.diagnostics.record(&OverlayEvent::ProbeChecked {
                code: probe.clone(),
                present: cells.contains(probe.as_str()),
            });
        }

        let visible = active::filter(&cells, active);
        let style = OverlayStyle::resolve(context.theme, &context.tile_provider_id, self.config.fill());
        let shapes: Vec<OverlayShape> = visible.into_iter().map(OverlayShape::active).collect();
        let shape_count = shapes.len();

        // The previous layer is released as the new one is installed.
        self.layer.replace(OverlayLayer::new(shapes, style));

        self.diagnostics.record(&OverlayEvent::Rendered {
            cells: cells.len(),
            shapes: shape_count,
        });
        Ok(RecomputeOutcome::Rendered {
            cells: cells.len(),
            shapes: shape_count,
        })
    }

    fn reject(&self, exceeded: CapExceeded) -> RecomputeOutcome {
        self.diagnostics.record(&OverlayEvent::Rejected {
            count: exceeded.count,
            cap: exceeded.cap,
            at_least: exceeded.at_least,
        });
        RecomputeOutcome::Rejected(exceeded)
    }
}

impl std::fmt::Debug for OverlayRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OverlayRenderer")
            .field("config", &self.config)
            .field("state", &self.state())
            .field("shapes", &self.layer.as_ref().map(|l| l.len()))
            .finish()
    }
}

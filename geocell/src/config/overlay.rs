//! Runtime overlay configuration.

use super::defaults::{DEFAULT_MIN_ZOOM, DEFAULT_PRECISION};
use crate::geohash::CellCode;
use crate::grid::CoverageStrategy;
use crate::guard::DEFAULT_MAX_CELLS;
use crate::style::FillStyle;

/// Parameters the overlay renderer is built from.
///
/// # Example
///
/// ```
/// use geocell::config::OverlayConfig;
///
/// let config = OverlayConfig::default();
/// assert_eq!(config.precision(), 8);
/// assert_eq!(config.max_cells(), 3000);
/// assert_eq!(config.min_zoom(), 18);
/// assert!(config.debug_probe().is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayConfig {
    /// Cell precision (1..=12)
    precision: u8,
    /// Largest cell count the guard lets through
    max_cells: usize,
    /// Lowest zoom at which the overlay is drawn
    min_zoom: u8,
    coverage: CoverageStrategy,
    fill: FillStyle,
    debug_probe: Option<CellCode>,
}

impl OverlayConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cell precision.
    ///
    /// Checked when the renderer is built, not here.
    pub fn with_precision(mut self, precision: u8) -> Self {
        self.precision = precision;
        self
    }

    /// Set the cost guard cap. Default: 3000 cells.
    pub fn with_max_cells(mut self, max_cells: usize) -> Self {
        self.max_cells = max_cells;
        self
    }

    /// Set the zoom threshold. Default: 18.
    pub fn with_min_zoom(mut self, min_zoom: u8) -> Self {
        self.min_zoom = min_zoom;
        self
    }

    pub fn with_coverage(mut self, coverage: CoverageStrategy) -> Self {
        self.coverage = coverage;
        self
    }

    pub fn with_fill(mut self, fill: FillStyle) -> Self {
        self.fill = fill;
        self
    }

    /// Report whether this cell is enumerated on every recompute.
    pub fn with_debug_probe(mut self, probe: Option<CellCode>) -> Self {
        self.debug_probe = probe;
        self
    }

    pub fn precision(&self) -> u8 {
        self.precision
    }

    pub fn max_cells(&self) -> usize {
        self.max_cells
    }

    pub fn min_zoom(&self) -> u8 {
        self.min_zoom
    }

    pub fn coverage(&self) -> CoverageStrategy {
        self.coverage
    }

    pub fn fill(&self) -> &FillStyle {
        &self.fill
    }

    pub fn debug_probe(&self) -> Option<&CellCode> {
        self.debug_probe.as_ref()
    }
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            max_cells: DEFAULT_MAX_CELLS,
            min_zoom: DEFAULT_MIN_ZOOM,
            coverage: CoverageStrategy::default(),
            fill: FillStyle::default(),
            debug_probe: None,
        }
    }
}

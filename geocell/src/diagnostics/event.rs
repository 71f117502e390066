//! Diagnostic events and the sink trait.

use crate::geohash::CellCode;

/// Something a recomputation did that a host may want to know about.
#[derive(Debug, Clone, PartialEq)]
pub enum OverlayEvent {
    /// Zoom was below the overlay threshold; no layer is shown
    Hidden { zoom: u8, min_zoom: u8 },
    /// Too many cells; the previous layer stays as it was. `count` is a
    /// floor rather than the real count when `at_least` is set.
    Rejected {
        count: usize,
        cap: usize,
        at_least: bool,
    },
    /// A new layer was installed
    Rendered { cells: usize, shapes: usize },
    /// Whether the configured probe code was among the visible cells
    ProbeChecked { code: CellCode, present: bool },
}

/// Receives [`OverlayEvent`]s.
///
/// Implementations must be `Send + Sync` so a single sink can be shared by
/// several map instances.
pub trait OverlayDiagnostics: Send + Sync {
    fn record(&self, event: &OverlayEvent);
}

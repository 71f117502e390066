//! No-operation diagnostics sink.

use super::event::{OverlayDiagnostics, OverlayEvent};

/// A sink that discards all events.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpDiagnostics;

impl OverlayDiagnostics for NoOpDiagnostics {
    #[inline]
    fn record(&self, _event: &OverlayEvent) {}
}

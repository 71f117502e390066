//! Tracing adapter.

use super::event::{OverlayDiagnostics, OverlayEvent};

/// Sink that turns events into structured `tracing` events.
///
/// Rejections are logged at `warn`, everything else at `debug`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl TracingDiagnostics {
    pub fn new() -> Self {
        Self
    }
}

impl OverlayDiagnostics for TracingDiagnostics {
    fn record(&self, event: &OverlayEvent) {
        match event {
            OverlayEvent::Hidden { zoom, min_zoom } => {
                tracing::debug!(zoom, min_zoom, "Overlay hidden below minimum zoom");
            }
            OverlayEvent::Rejected {
                count,
                cap,
                at_least,
            } => {
                tracing::warn!(
                    count,
                    cap,
                    at_least,
                    "Too many geohash cells ({}). Zoom in more to see the overlay.",
                    count
                );
            }
            OverlayEvent::Rendered { cells, shapes } => {
                tracing::debug!(cells, shapes, "Rendered geohash overlay");
            }
            OverlayEvent::ProbeChecked { code, present } => {
                tracing::debug!(code = %code, present, "Probe cell visibility");
            }
        }
    }
}

//! In-memory diagnostics sink.

use std::sync::Mutex;

use super::event::{OverlayDiagnostics, OverlayEvent};

/// Sink that stores every event it receives.
#[derive(Debug, Default)]
pub struct MemoryDiagnostics {
    events: Mutex<Vec<OverlayEvent>>,
}

impl MemoryDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events recorded so far.
    pub fn events(&self) -> Vec<OverlayEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Most recent event, if any.
    pub fn last(&self) -> Option<OverlayEvent> {
        self.events().pop()
    }
}

impl OverlayDiagnostics for MemoryDiagnostics {
    fn record(&self, event: &OverlayEvent) {
        match self.events.lock() {
            Ok(mut events) => events.push(event.clone()),
            Err(poisoned) => poisoned.into_inner().push(event.clone()),
        }
    }
}

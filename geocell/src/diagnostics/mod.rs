//! Overlay diagnostics hook.
//!
//! The renderer reports what each recomputation did through the
//! [`OverlayDiagnostics`] trait rather than logging directly, so hosts can
//! route the events wherever they like.
//!
//! # Adapters
//!
//! - [`TracingDiagnostics`]: emits structured `tracing` events
//! - [`NoOpDiagnostics`]: discards everything
//! - [`MemoryDiagnostics`]: keeps events in memory for inspection
//!
//! # Example
//!
//! ```
//! use geocell::diagnostics::{MemoryDiagnostics, OverlayDiagnostics, OverlayEvent};
//!
//! let sink = MemoryDiagnostics::new();
//! sink.record(&OverlayEvent::Rejected {
//!     count: 6903,
//!     cap: 3000,
//!     at_least: false,
//! });
//! assert_eq!(sink.events().len(), 1);
//! ```

mod event;
mod memory;
mod noop;
mod tracing_adapter;

pub use event::{OverlayDiagnostics, OverlayEvent};
pub use memory::MemoryDiagnostics;
pub use noop::NoOpDiagnostics;
pub use tracing_adapter::TracingDiagnostics;

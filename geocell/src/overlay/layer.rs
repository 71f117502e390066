//! Overlay layer types.

use crate::geohash::{self, CellBounds, CellCode};
use crate::style::{OverlayStyle, Theme};

/// Per-call inputs that affect gating and styling but not which cells are
/// geometrically visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    pub zoom: u8,
    pub theme: Theme,
    pub tile_provider_id: String,
}

impl RenderContext {
    pub fn new(zoom: u8, theme: Theme, tile_provider_id: impl Into<String>) -> Self {
        Self {
            zoom,
            theme,
            tile_provider_id: tile_provider_id.into(),
        }
    }
}

/// One rectangle drawn for a cell.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayShape {
    pub code: CellCode,
    pub bounds: CellBounds,
    /// Always true today; only active cells become shapes.
    pub active: bool,
    /// Hover label
    pub tooltip: String,
}

impl OverlayShape {
    /// Builds the shape for an active cell.
    pub fn active(code: CellCode) -> Self {
        let bounds = geohash::decode_bounds(&code);
        let tooltip = code.to_string();
        Self {
            code,
            bounds,
            active: true,
            tooltip,
        }
    }
}

/// A complete set of shapes sharing one style.
///
/// Layers are never patched; each recomputation builds a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayLayer {
    shapes: Vec<OverlayShape>,
    style: OverlayStyle,
}

impl OverlayLayer {
    pub fn new(shapes: Vec<OverlayShape>, style: OverlayStyle) -> Self {
        Self { shapes, style }
    }

    /// Shapes in paint order.
    pub fn shapes(&self) -> &[OverlayShape] {
        &self.shapes
    }

    pub fn style(&self) -> &OverlayStyle {
        &self.style
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Codes in paint order.
    pub fn codes(&self) -> impl Iterator<Item = &CellCode> {
        self.shapes.iter().map(|s| &s.code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.shapes.iter().any(|s| s.code.as_str() == code)
    }
}

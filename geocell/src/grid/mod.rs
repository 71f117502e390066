//! Visible cell enumeration.
//!
//! Finds the geohash cells covering a viewport at a fixed precision. Two
//! strategies are available:
//!
//! - [`CoverageStrategy::Lattice`] samples points on a grid spaced at half the
//!   center cell's height and width, starting from the south-west corner.
//!   This is the long-standing overlay behavior and the default.
//! - [`CoverageStrategy::Exact`] walks the fixed-precision cell lattice by
//!   row/column index and yields every cell that touches the viewport.
//!
//! Both return a fresh [`CellSet`] per call; nothing accumulates between calls.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::coord::{GeoPoint, ViewportBounds, MIN_LAT, MIN_LON};
use crate::geohash::{self, lattice_bits, CellCode, GeohashError};

/// Deduplicated cell codes, iterated in lexicographic order.
pub type CellSet = BTreeSet<CellCode>;

/// How [`enumerate_with`] covers the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoverageStrategy {
    /// Half-step point sampling from the center cell's dimensions
    #[default]
    Lattice,
    /// Index walk over every cell touching the viewport
    Exact,
}

impl CoverageStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            CoverageStrategy::Lattice => "lattice",
            CoverageStrategy::Exact => "exact",
        }
    }
}

impl fmt::Display for CoverageStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CoverageStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lattice" => Ok(CoverageStrategy::Lattice),
            "exact" => Ok(CoverageStrategy::Exact),
            other => Err(format!(
                "unknown coverage strategy '{}' (expected 'lattice' or 'exact')",
                other
            )),
        }
    }
}

/// Enumerates the cells covering `bounds` with the default lattice sampling.
pub fn enumerate(bounds: &ViewportBounds, precision: u8) -> Result<CellSet, GeohashError> {
    enumerate_with(bounds, precision, CoverageStrategy::Lattice)
}

/// Enumerates the cells covering `bounds` using `strategy`.
///
/// # Errors
///
/// Returns [`GeohashError::InvalidPrecision`] if `precision` is out of range.
pub fn enumerate_with(
    bounds: &ViewportBounds,
    precision: u8,
    strategy: CoverageStrategy,
) -> Result<CellSet, GeohashError> {
    geohash::validate_precision(precision)?;
    match strategy {
        CoverageStrategy::Lattice => lattice_cover(bounds, precision),
        CoverageStrategy::Exact => exact_cover(bounds, precision),
    }
}

/// Number of cells the viewport touches at `precision`.
///
/// Pure index arithmetic, so it is cheap even for viewports spanning
/// billions of cells. Saturates at `usize::MAX`.
pub fn estimate_cell_count(bounds: &ViewportBounds, precision: u8) -> Result<usize, GeohashError> {
    let (rows, cols) = index_ranges(bounds, precision)?;
    let row_count = rows.1 - rows.0 + 1;
    let col_count = cols.1 - cols.0 + 1;
    let total = row_count.saturating_mul(col_count);
    Ok(usize::try_from(total).unwrap_or(usize::MAX))
}

/// Smallest number of cells `strategy` can return for `bounds`.
///
/// The exact walk returns every touching cell. The half-step lattice always
/// samples every row and column except possibly the northmost row and the
/// eastmost column, so at least `(rows - 1) * (cols - 1)` cells come back.
/// A cost check against this bound never rejects a viewport the enumeration
/// itself would have let through.
pub fn lower_bound_cell_count(
    bounds: &ViewportBounds,
    precision: u8,
    strategy: CoverageStrategy,
) -> Result<usize, GeohashError> {
    let (rows, cols) = index_ranges(bounds, precision)?;
    let mut row_count = rows.1 - rows.0 + 1;
    let mut col_count = cols.1 - cols.0 + 1;
    if strategy == CoverageStrategy::Lattice {
        row_count = (row_count - 1).max(1);
        col_count = (col_count - 1).max(1);
    }
    let total = row_count.saturating_mul(col_count);
    Ok(usize::try_from(total).unwrap_or(usize::MAX))
}

fn lattice_cover(bounds: &ViewportBounds, precision: u8) -> Result<CellSet, GeohashError> {
    let center = geohash::encode(bounds.center(), precision)?;
    let center_bounds = geohash::decode_bounds(&center);

    let lat_step = center_bounds.height() * 0.5;
    let lon_step = center_bounds.width() * 0.5;

    let mut cells = CellSet::new();

    if !is_usable_step(lat_step) || !is_usable_step(lon_step) {
        cells.insert(center);
        return Ok(cells);
    }

    let sw = bounds.south_west();
    let ne = bounds.north_east();

    // Sample positions are sw + i * step rather than a running sum so that
    // rounding cannot add or drop a row at the north/east edge.
    let lat_samples = (bounds.height() / lat_step).floor() as u64;
    let lon_samples = (bounds.width() / lon_step).floor() as u64;

    for i in 0..=lat_samples {
        let lat = (sw.lat + i as f64 * lat_step).min(ne.lat);
        for j in 0..=lon_samples {
            let lon = (sw.lon + j as f64 * lon_step).min(ne.lon);
            cells.insert(geohash::encode(GeoPoint { lat, lon }, precision)?);
        }
    }

    Ok(cells)
}

#[inline]
fn is_usable_step(step: f64) -> bool {
    step.is_finite() && step > 0.0
}

fn exact_cover(bounds: &ViewportBounds, precision: u8) -> Result<CellSet, GeohashError> {
    let (height, width) = geohash::cell_size(precision)?;
    let (rows, cols) = index_ranges(bounds, precision)?;

    let mut cells = CellSet::new();
    for row in rows.0..=rows.1 {
        let lat = MIN_LAT + (row as f64 + 0.5) * height;
        for col in cols.0..=cols.1 {
            let lon = MIN_LON + (col as f64 + 0.5) * width;
            cells.insert(geohash::encode(GeoPoint { lat, lon }, precision)?);
        }
    }

    Ok(cells)
}

/// Inclusive (row, column) index ranges of the cells touching `bounds`.
fn index_ranges(
    bounds: &ViewportBounds,
    precision: u8,
) -> Result<((u64, u64), (u64, u64)), GeohashError> {
    let (height, width) = geohash::cell_size(precision)?;
    let (lat_bits, lon_bits) = lattice_bits(precision);

    let sw = bounds.south_west();
    let ne = bounds.north_east();

    let rows = (
        cell_index(sw.lat, MIN_LAT, height, lat_bits),
        cell_index(ne.lat, MIN_LAT, height, lat_bits),
    );
    let cols = (
        cell_index(sw.lon, MIN_LON, width, lon_bits),
        cell_index(ne.lon, MIN_LON, width, lon_bits),
    );

    Ok((rows, cols))
}

/// Lattice index of the cell holding `value`, matching the encoder's rule
/// that a value on a boundary belongs to the upper cell.
#[inline]
fn cell_index(value: f64, origin: f64, size: f64, bits: u32) -> u64 {
    let last = (1u64 << bits) - 1;
    let index = ((value - origin) / size).floor();
    if index <= 0.0 {
        0
    } else {
        (index as u64).min(last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::viewport_around;
    use crate::geohash::decode_bounds;

    fn code(s: &str) -> CellCode {
        CellCode::parse(s).unwrap()
    }

    /// Viewport whose interior spans `rows` × `cols` cells, starting just
    /// inside the south-west corner of `origin`.
    fn block_from(origin: &str, rows: f64, cols: f64) -> ViewportBounds {
        let b = decode_bounds(&code(origin));
        let eps = b.height() * 1e-3;
        ViewportBounds::from_edges(
            b.south + eps,
            b.west + eps,
            b.south + (rows - 0.5) * b.height(),
            b.west + (cols - 0.5) * b.width(),
        )
        .unwrap()
    }

    #[test]
    fn test_viewport_inside_single_cell() {
        let b = decode_bounds(&code("sx8d"));
        let inner = ViewportBounds::from_edges(
            b.south + b.height() * 0.25,
            b.west + b.width() * 0.25,
            b.south + b.height() * 0.75,
            b.west + b.width() * 0.75,
        )
        .unwrap();

        let cells = enumerate(&inner, 4).unwrap();
        assert_eq!(cells.len(), 1);
        assert!(cells.contains("sx8d"));
    }

    #[test]
    fn test_block_of_two_by_three_cells() {
        let bounds = block_from("sx8d9x3s", 2.0, 3.0);
        let cells = enumerate(&bounds, 8).unwrap();
        assert_eq!(cells.len(), 6);
        assert!(cells.contains("sx8d9x3s"));
        assert_eq!(estimate_cell_count(&bounds, 8).unwrap(), 6);
    }

    #[test]
    fn test_exact_matches_block() {
        let bounds = block_from("sx8d9x3s", 2.0, 3.0);
        let lattice = enumerate(&bounds, 8).unwrap();
        let exact = enumerate_with(&bounds, 8, CoverageStrategy::Exact).unwrap();
        assert_eq!(lattice, exact);
    }

    #[test]
    fn test_degenerate_viewport_yields_center_cell() {
        let bounds = ViewportBounds::from_edges(42.6977, 23.3219, 42.6977, 23.3219).unwrap();
        let cells = enumerate(&bounds, 8).unwrap();
        assert_eq!(cells.len(), 1);
        assert!(cells.contains("sx8dfsyk"));

        let exact = enumerate_with(&bounds, 8, CoverageStrategy::Exact).unwrap();
        assert_eq!(cells, exact);
    }

    #[test]
    fn test_repeated_calls_do_not_accumulate() {
        let bounds = block_from("sx8dfsyk", 4.0, 4.0);
        let first = enumerate(&bounds, 8).unwrap();
        let second = enumerate(&bounds, 8).unwrap();
        assert_eq!(first.len(), second.len());
        assert_eq!(first, second);
    }

    #[test]
    fn test_every_cell_intersects_viewport() {
        let center = GeoPoint::new(42.6977, 23.3219).unwrap();
        let bounds = viewport_around(center, 18, 1280, 800).unwrap();
        for strategy in [CoverageStrategy::Lattice, CoverageStrategy::Exact] {
            let cells = enumerate_with(&bounds, 8, strategy).unwrap();
            assert!(!cells.is_empty());
            for cell in &cells {
                assert!(
                    decode_bounds(cell).intersects(&bounds),
                    "{} ({}) lies outside the viewport",
                    cell,
                    strategy
                );
            }
        }
    }

    #[test]
    fn test_lattice_is_subset_of_exact() {
        let center = GeoPoint::new(42.6977, 23.3219).unwrap();
        let bounds = viewport_around(center, 18, 1280, 800).unwrap();
        let lattice = enumerate(&bounds, 8).unwrap();
        let exact = enumerate_with(&bounds, 8, CoverageStrategy::Exact).unwrap();
        assert!(lattice.is_subset(&exact));
        assert_eq!(exact.len(), estimate_cell_count(&bounds, 8).unwrap());
    }

    #[test]
    fn test_sofia_wide_viewport_excludes_seed_cell() {
        // The seed cell sits south-west of this box and must not appear.
        let bounds = ViewportBounds::from_edges(42.69, 23.31, 42.71, 23.33).unwrap();
        let cells = enumerate(&bounds, 8).unwrap();
        assert!(!cells.contains("sx8d9x3s"));
        assert!(cells.len() > 3000);
        assert!(estimate_cell_count(&bounds, 8).unwrap() > 3000);
    }

    #[test]
    fn test_viewport_edge_on_cell_boundary_counts_neighbor() {
        let b = decode_bounds(&code("sx8d9x3s"));
        let bounds = ViewportBounds::from_edges(
            b.south + b.height() * 0.25,
            b.west + b.width() * 0.25,
            b.north,
            b.east,
        )
        .unwrap();
        // Touching the north-east corner brings in three neighbors.
        assert_eq!(estimate_cell_count(&bounds, 8).unwrap(), 4);
        let exact = enumerate_with(&bounds, 8, CoverageStrategy::Exact).unwrap();
        assert_eq!(exact.len(), 4);
        assert!(exact.contains("sx8d9x3s"));
    }

    #[test]
    fn test_lower_bound_never_exceeds_enumeration() {
        let center = GeoPoint::new(42.6977, 23.3219).unwrap();
        for (w, h) in [(0, 0), (300, 200), (1280, 800), (1920, 1080)] {
            let bounds = viewport_around(center, 18, w, h).unwrap();
            for strategy in [CoverageStrategy::Lattice, CoverageStrategy::Exact] {
                let cells = enumerate_with(&bounds, 8, strategy).unwrap();
                let bound = lower_bound_cell_count(&bounds, 8, strategy).unwrap();
                assert!(
                    bound <= cells.len(),
                    "{}x{} {}: bound {} > {}",
                    w,
                    h,
                    strategy,
                    bound,
                    cells.len()
                );
            }
        }
    }

    #[test]
    fn test_exact_lower_bound_equals_estimate() {
        let bounds = ViewportBounds::from_edges(42.69, 23.31, 42.71, 23.33).unwrap();
        assert_eq!(
            lower_bound_cell_count(&bounds, 8, CoverageStrategy::Exact).unwrap(),
            estimate_cell_count(&bounds, 8).unwrap()
        );
        assert!(lower_bound_cell_count(&bounds, 8, CoverageStrategy::Lattice).unwrap() > 3000);
    }

    #[test]
    fn test_whole_world_estimate_at_precision_one() {
        let world = ViewportBounds::from_edges(-90.0, -180.0, 90.0, 180.0).unwrap();
        assert_eq!(estimate_cell_count(&world, 1).unwrap(), 32);
        let cells = enumerate_with(&world, 1, CoverageStrategy::Exact).unwrap();
        assert_eq!(cells.len(), 32);
    }

    #[test]
    fn test_whole_world_estimate_at_max_precision_does_not_overflow() {
        let world = ViewportBounds::from_edges(-90.0, -180.0, 90.0, 180.0).unwrap();
        let count = estimate_cell_count(&world, 12).unwrap();
        assert!(count > 1_000_000_000);
    }

    #[test]
    fn test_invalid_precision_rejected() {
        let bounds = ViewportBounds::from_edges(0.0, 0.0, 1.0, 1.0).unwrap();
        assert_eq!(
            enumerate(&bounds, 0),
            Err(GeohashError::InvalidPrecision(0))
        );
        assert!(estimate_cell_count(&bounds, 13).is_err());
    }

    #[test]
    fn test_coverage_strategy_parse() {
        assert_eq!(
            "Exact".parse::<CoverageStrategy>().unwrap(),
            CoverageStrategy::Exact
        );
        assert_eq!(
            "lattice".parse::<CoverageStrategy>().unwrap(),
            CoverageStrategy::Lattice
        );
        assert!("quad".parse::<CoverageStrategy>().is_err());
        assert_eq!(CoverageStrategy::default(), CoverageStrategy::Lattice);
    }
}

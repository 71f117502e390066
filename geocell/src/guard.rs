//! Overlay cost guard.
//!
//! Enumeration and rendering cost both grow with viewport area at a fixed
//! precision. The guard refuses cell sets above a cap so a zoomed-out map
//! stays responsive; callers keep whatever overlay they already show.

use thiserror::Error;

use crate::grid::{CellSet, CoverageStrategy};

/// Default cap on cells per overlay.
pub const DEFAULT_MAX_CELLS: usize = 3000;

/// A cell set was larger than the configured cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error(
    "Too many cells ({}{count}, cap {cap}); zoom in to see the overlay",
    count_prefix(.at_least)
)]
pub struct CapExceeded {
    /// Number of cells that were offered, or a floor on it when `at_least`
    pub count: usize,
    /// Cap in force
    pub cap: usize,
    /// `count` is a lower bound taken before enumerating
    pub at_least: bool,
}

fn count_prefix(at_least: &bool) -> &'static str {
    if *at_least {
        "at least "
    } else {
        ""
    }
}

/// Rejects cell sets larger than `max_cells`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostGuard {
    max_cells: usize,
}

impl CostGuard {
    pub fn new(max_cells: usize) -> Self {
        Self { max_cells }
    }

    pub fn max_cells(&self) -> usize {
        self.max_cells
    }

    /// Passes `cells` through when there are at most `max_cells` of them.
    pub fn check(&self, cells: CellSet) -> Result<CellSet, CapExceeded> {
        self.check_count(cells.len())?;
        Ok(cells)
    }

    /// Applies the cap to a known cell count.
    pub fn check_count(&self, count: usize) -> Result<usize, CapExceeded> {
        self.check_with(count, false)
    }

    /// Applies the cap to `grid::lower_bound_cell_count` before enumerating.
    ///
    /// The exact walk's bound is its real count; the lattice bound is only a
    /// floor, and a rejection says so.
    pub fn check_lower_bound(
        &self,
        bound: usize,
        strategy: CoverageStrategy,
    ) -> Result<usize, CapExceeded> {
        self.check_with(bound, strategy == CoverageStrategy::Lattice)
    }

    fn check_with(&self, count: usize, at_least: bool) -> Result<usize, CapExceeded> {
        if count > self.max_cells {
            return Err(CapExceeded {
                count,
                cap: self.max_cells,
                at_least,
            });
        }
        Ok(count)
    }
}

impl Default for CostGuard {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CELLS)
    }
}

/// One-shot form of [`CostGuard::check`].
pub fn check(cells: CellSet, max_count: usize) -> Result<CellSet, CapExceeded> {
    CostGuard::new(max_count).check(cells)
}

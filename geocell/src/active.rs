//! Active cell set and filtering.
//!
//! The set of active cells is owned by whatever embeds the overlay; the
//! engine only reads it. Toggling is exposed for that embedding layer but no
//! interaction is wired to it here.

use std::collections::HashSet;

use crate::geohash::{CellCode, GeohashError};
use crate::grid::CellSet;

/// Cell highlighted when no other active set is configured.
pub const SEED_CELL: &str = "sx8d9x3s";

/// Externally owned set of active cell codes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveSet {
    codes: HashSet<CellCode>,
}

impl ActiveSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the default set holding only [`SEED_CELL`].
    pub fn seeded() -> Self {
        Self::from_iter([CellCode::from_encoded(SEED_CELL.to_string())])
    }

    /// Parses a comma- or whitespace-separated list of codes.
    ///
    /// Empty input gives an empty set.
    pub fn parse_list(list: &str) -> Result<Self, GeohashError> {
        list.split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .map(CellCode::parse)
            .collect()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains(code)
    }

    /// Adds a code. Returns false if it was already active.
    pub fn insert(&mut self, code: CellCode) -> bool {
        self.codes.insert(code)
    }

    /// Removes a code. Returns false if it was not active.
    pub fn remove(&mut self, code: &str) -> bool {
        self.codes.remove(code)
    }

    /// Flips a code's membership and returns whether it is now active.
    pub fn toggle(&mut self, code: CellCode) -> bool {
        if self.codes.remove(code.as_str()) {
            false
        } else {
            self.codes.insert(code);
            true
        }
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CellCode> {
        self.codes.iter()
    }

    /// Active codes in lexicographic order.
    pub fn sorted(&self) -> Vec<CellCode> {
        let mut codes: Vec<CellCode> = self.codes.iter().cloned().collect();
        codes.sort();
        codes
    }
}

impl FromIterator<CellCode> for ActiveSet {
    fn from_iter<I: IntoIterator<Item = CellCode>>(iter: I) -> Self {
        Self {
            codes: iter.into_iter().collect(),
        }
    }
}

impl Extend<CellCode> for ActiveSet {
    fn extend<I: IntoIterator<Item = CellCode>>(&mut self, iter: I) {
        self.codes.extend(iter);
    }
}

/// Returns the cells that are also active.
///
/// Output follows the iteration order of [`CellSet`], i.e. lexicographic by
/// code, so repeated calls paint in the same order.
pub fn filter(cells: &CellSet, active: &ActiveSet) -> Vec<CellCode> {
    if active.is_empty() {
        return Vec::new();
    }
    cells
        .iter()
        .filter(|code| active.contains(code.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> CellCode {
        CellCode::parse(s).unwrap()
    }

    fn cell_set(codes: &[&str]) -> CellSet {
        codes.iter().map(|s| code(s)).collect()
    }

    #[test]
    fn test_seeded_contains_seed_cell() {
        let active = ActiveSet::seeded();
        assert_eq!(active.len(), 1);
        assert!(active.contains(SEED_CELL));
        assert!(CellCode::parse(SEED_CELL).is_ok());
    }

    #[test]
    fn test_filter_is_intersection() {
        let cells = cell_set(&["sx8d9x3s", "sx8d9x3t", "sx8d9x3u"]);
        let active: ActiveSet = [code("sx8d9x3t"), code("u4pruydq")].into_iter().collect();
        assert_eq!(filter(&cells, &active), vec![code("sx8d9x3t")]);
    }

    #[test]
    fn test_filter_with_empty_active_set() {
        let cells = cell_set(&["sx8d9x3s", "sx8d9x3t"]);
        assert!(filter(&cells, &ActiveSet::new()).is_empty());
    }

    #[test]
    fn test_filter_with_superset_returns_all_cells_sorted() {
        let cells = cell_set(&["sx8d9x3u", "sx8d9x3s", "sx8d9x3t"]);
        let mut active: ActiveSet = cells.iter().cloned().collect();
        active.insert(code("zzzzzzzz"));
        assert_eq!(
            filter(&cells, &active),
            vec![code("sx8d9x3s"), code("sx8d9x3t"), code("sx8d9x3u")]
        );
    }

    #[test]
    fn test_filter_on_empty_cells() {
        assert!(filter(&CellSet::new(), &ActiveSet::seeded()).is_empty());
    }

    #[test]
    fn test_toggle_flips_membership() {
        let mut active = ActiveSet::new();
        assert!(active.toggle(code("sx8d9x3s")));
        assert!(active.contains("sx8d9x3s"));
        assert!(!active.toggle(code("sx8d9x3s")));
        assert!(active.is_empty());
    }

    #[test]
    fn test_insert_and_remove() {
        let mut active = ActiveSet::new();
        assert!(active.insert(code("sx8d")));
        assert!(!active.insert(code("sx8d")));
        assert!(active.remove("sx8d"));
        assert!(!active.remove("sx8d"));
    }

    #[test]
    fn test_parse_list() {
        let active = ActiveSet::parse_list("sx8d9x3s, sx8dfsyk  u4pruydq").unwrap();
        assert_eq!(
            active.sorted(),
            vec![code("sx8d9x3s"), code("sx8dfsyk"), code("u4pruydq")]
        );
        assert!(ActiveSet::parse_list("").unwrap().is_empty());
        assert!(ActiveSet::parse_list("sx8d, bad!").is_err());
    }
}

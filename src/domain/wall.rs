// ============================================================
// Layer 3 - Wall Coordinates
// ============================================================
// A WallCoordinate is one (row, col) pair. A WallSet is the
// ordered list of them in scan order: top grid line first,
// left to right within a line.
//
// Each grid cell is visited exactly once, so the set never
// needs deduplication and its order is fully deterministic.
//
// Reference: Rust Book §8 (Vectors)

use serde::Serialize;
use std::fmt;

/// Grid position of a single wall tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WallCoordinate {
    pub row: i64,
    pub col: i64,
}

impl WallCoordinate {
    pub fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }
}

/// Renders as a tuple, e.g. `(3, 1)`
impl fmt::Display for WallCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// All wall coordinates found in one scan, in scan order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WallSet {
    coords: Vec<WallCoordinate>,
}

impl WallSet {
    /// Append a coordinate. Only the scanner builds sets,
    /// so this stays crate-private.
    pub(crate) fn push(&mut self, coord: WallCoordinate) {
        self.coords.push(coord);
    }

    /// Number of walls found
    pub fn count(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WallCoordinate> {
        self.coords.iter()
    }
}

impl FromIterator<WallCoordinate> for WallSet {
    fn from_iter<I: IntoIterator<Item = WallCoordinate>>(iter: I) -> Self {
        Self { coords: iter.into_iter().collect() }
    }
}

/// Renders as a literal sequence, e.g. `[(3, 1), (2, 0)]`
impl fmt::Display for WallSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, coord) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{coord}")?;
        }
        write!(f, "]")
    }
}

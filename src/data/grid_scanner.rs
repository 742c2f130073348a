// ============================================================
// Layer 4 - Grid Scanner
// ============================================================
// Walks the raw CSV text of a tile layer and collects every
// cell whose code equals the wall code.
//
// Scanning rules (applied in order):
//   1. The first non-blank line gets row = origin.top_row(height)
//   2. Blank lines are skipped and do NOT consume a row number
//   3. Each line is split on ','; every token advances the column,
//      whether it is a wall, another code, blank or malformed
//   4. Each following non-blank line is one row lower
//
// Example (wall code 5, height 3, DeclaredHeight):
//
//   1,5,1     row 3 → (3, 1)
//   5,5,1     row 2 → (2, 0), (2, 1)
//   1,1,1     row 1
//
// Row and column are loop-local; nothing survives between scans,
// so scanning the same grid twice gives the same result.
//
// Reference: Rust Book §13 (Iterators and Closures)

use serde::Serialize;

use crate::domain::{
    grid::RawGrid,
    tile::{RowOrigin, TileCell},
    wall::{WallCoordinate, WallSet},
};

/// Walls found in one grid plus a tally of everything else.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanOutcome {
    /// Wall coordinates in scan order
    pub walls: WallSet,

    /// Non-blank lines scanned
    pub rows: usize,

    /// Empty tokens (e.g. after the trailing comma of a row)
    pub blank: usize,

    /// Integer tokens that are not the wall code
    pub other: usize,

    /// Non-empty tokens that failed to parse as integers
    pub malformed: usize,
}

/// Scans raw grid text for one wall code under one row origin.
#[derive(Debug, Clone, Copy)]
pub struct GridScanner {
    wall_code: i64,
    origin:    RowOrigin,
}

impl GridScanner {
    pub fn new(wall_code: i64, origin: RowOrigin) -> Self {
        Self { wall_code, origin }
    }

    /// Scan a grid and return the walls in scan order.
    pub fn scan(&self, grid: &RawGrid) -> ScanOutcome {
        let top = self.origin.top_row(grid.height);
        let mut outcome = ScanOutcome::default();

        let lines = grid.data.lines().filter(|line| !line.trim().is_empty());

        for (row_index, line) in lines.enumerate() {
            let row = top - row_index as i64;

            // Cells that held any token at all, for the width check
            let mut filled = 0usize;

            for (col, token) in line.split(',').enumerate() {
                match TileCell::classify(token, self.wall_code) {
                    TileCell::Wall => {
                        tracing::trace!(row, col, "wall");
                        outcome.walls.push(WallCoordinate::new(row, col as i64));
                        filled += 1;
                    }
                    TileCell::Other(code) => {
                        tracing::trace!(row, col, code, "not a wall");
                        outcome.other += 1;
                        filled += 1;
                    }
                    TileCell::Blank => {
                        tracing::trace!(row, col, "blank");
                        outcome.blank += 1;
                    }
                    TileCell::Malformed(raw) => {
                        tracing::warn!(
                            "Malformed tile code '{}' at row {}, col {}; treating as non-wall",
                            raw,
                            row,
                            col
                        );
                        outcome.malformed += 1;
                        filled += 1;
                    }
                }
            }

            if let Some(width) = grid.width {
                if filled != width as usize {
                    tracing::warn!(
                        "Row {} has {} cells but the map declares width {}",
                        row,
                        filled,
                        width
                    );
                }
            }

            outcome.rows += 1;
        }

        tracing::debug!(
            "Scanned {} rows: {} walls, {} other, {} blank, {} malformed",
            outcome.rows,
            outcome.walls.count(),
            outcome.other,
            outcome.blank,
            outcome.malformed,
        );

        outcome
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn coords(outcome: &ScanOutcome) -> Vec<(i64, i64)> {
        outcome.walls.iter().map(|c| (c.row, c.col)).collect()
    }

    #[test]
    fn test_three_by_three_scenario() {
        let grid    = RawGrid::new(3, "1,5,1\n5,5,1\n1,1,1");
        let outcome = GridScanner::new(5, RowOrigin::DeclaredHeight).scan(&grid);

        assert_eq!(coords(&outcome), vec![(3, 1), (2, 0), (2, 1)]);
        assert_eq!(outcome.walls.count(), 3);
        assert_eq!(outcome.rows, 3);
    }

    #[test]
    fn test_height_minus_one_origin() {
        let grid    = RawGrid::new(3, "1,5,1\n5,5,1\n1,1,1");
        let outcome = GridScanner::new(5, RowOrigin::HeightMinusOne).scan(&grid);

        assert_eq!(coords(&outcome), vec![(2, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn test_no_walls_gives_empty_set() {
        let grid    = RawGrid::new(2, "1,1\n3,4");
        let outcome = GridScanner::new(2, RowOrigin::DeclaredHeight).scan(&grid);

        assert!(outcome.walls.is_empty());
        assert_eq!(outcome.walls.count(), 0);
        assert_eq!(outcome.other, 4);
    }

    #[test]
    fn test_single_wall_position() {
        let grid    = RawGrid::new(3, "0,0,0\n0,0,0\n0,0,2");
        let outcome = GridScanner::new(2, RowOrigin::DeclaredHeight).scan(&grid);

        assert_eq!(coords(&outcome), vec![(1, 2)]);
    }

    #[test]
    fn test_empty_grid_text() {
        let grid    = RawGrid::new(4, "");
        let outcome = GridScanner::new(2, RowOrigin::DeclaredHeight).scan(&grid);

        assert!(outcome.walls.is_empty());
        assert_eq!(outcome.rows, 0);
    }

    #[test]
    fn test_blank_lines_do_not_shift_rows() {
        // Tiled writes a newline right after <data> and before </data>
        let plain  = RawGrid::new(2, "2,0\n0,2");
        let padded = RawGrid::new(2, "\n2,0\n\n0,2\n   \n");
        let scanner = GridScanner::new(2, RowOrigin::DeclaredHeight);

        assert_eq!(scanner.scan(&plain).walls, scanner.scan(&padded).walls);
        assert_eq!(coords(&scanner.scan(&padded)), vec![(2, 0), (1, 1)]);
    }

    #[test]
    fn test_empty_token_still_advances_column() {
        let grid    = RawGrid::new(1, "0,,2,");
        let outcome = GridScanner::new(2, RowOrigin::DeclaredHeight).scan(&grid);

        assert_eq!(coords(&outcome), vec![(1, 2)]);
        assert_eq!(outcome.blank, 2);
    }

    #[test]
    fn test_malformed_token_is_counted_not_fatal() {
        let grid    = RawGrid::new(1, "x,2");
        let outcome = GridScanner::new(2, RowOrigin::DeclaredHeight).scan(&grid);

        assert_eq!(coords(&outcome), vec![(1, 1)]);
        assert_eq!(outcome.malformed, 1);
    }

    #[test]
    fn test_scan_is_deterministic() {
        let grid    = RawGrid::new(3, "2,1,2,\n1,2,1,\n2,2,2\n");
        let scanner = GridScanner::new(2, RowOrigin::DeclaredHeight);

        assert_eq!(scanner.scan(&grid), scanner.scan(&grid));
    }

    #[test]
    fn test_windows_line_endings() {
        let grid    = RawGrid::new(2, "2,0,\r\n0,2\r\n");
        let outcome = GridScanner::new(2, RowOrigin::DeclaredHeight).scan(&grid);

        assert_eq!(coords(&outcome), vec![(2, 0), (1, 1)]);
    }
}

// ============================================================
// Layer 3 - Tile Cells and Row Origin
// ============================================================
// Two small enums that make the scanning rules explicit.
//
// TileCell is the result of classifying one CSV token:
//
//   ""      → Blank
//   "5"     → Wall       (when the wall code is 5)
//   "1"     → Other(1)
//   "x7"    → Malformed("x7")
//
// Only Wall produces a coordinate. Blank, Other and Malformed
// are all "not a wall", but they are counted separately so a
// broken map is visible in the report instead of silently
// looking like empty floor.
//
// RowOrigin decides which row number the first line of the
// grid text gets. Tiled stores rows top to bottom; renderers
// that put y=0 at the bottom want the top row to be numbered
// from the map height downwards.
//
// Reference: Rust Book §6 (Enums and Pattern Matching)

use serde::Serialize;

/// Classification of a single token of the grid text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileCell {
    /// Empty or whitespace-only token (e.g. after a trailing comma)
    Blank,
    /// Integer token equal to the wall code
    Wall,
    /// Integer token that is not the wall code
    Other(i64),
    /// Non-empty token that is not a base-10 integer
    Malformed(String),
}

impl TileCell {
    /// Classify one raw token against the wall code.
    ///
    /// Surrounding whitespace is ignored, so `" 5"` and `"5\r"`
    /// both parse as 5.
    pub fn classify(token: &str, wall_code: i64) -> Self {
        let token = token.trim();

        if token.is_empty() {
            return TileCell::Blank;
        }

        match token.parse::<i64>() {
            Ok(code) if code == wall_code => TileCell::Wall,
            Ok(code) => TileCell::Other(code),
            Err(_) => TileCell::Malformed(token.to_string()),
        }
    }
}

/// Row number given to the first non-blank line of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RowOrigin {
    /// First line is row `height`, then `height - 1`, ...
    #[default]
    DeclaredHeight,
    /// First line is row `height - 1`, last line is row 0
    HeightMinusOne,
}

impl RowOrigin {
    /// Row index of the topmost grid line for a map of this height.
    pub fn top_row(self, height: u32) -> i64 {
        let height = i64::from(height);
        match self {
            RowOrigin::DeclaredHeight => height,
            RowOrigin::HeightMinusOne => height - 1,
        }
    }
}

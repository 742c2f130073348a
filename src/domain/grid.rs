// ============================================================
// Layer 3 - RawGrid Domain Type
// ============================================================
// What the loader hands to the scanner: the declared map size
// and the untouched text of one CSV-encoded <data> element.
//
// The text is kept raw on purpose so the scanner can tell
// blank cells apart from malformed ones:
//
//   <data encoding="csv">
//   1,5,1,
//   5,5,1,
//   1,1,1
//   </data>
//
// Reference: Rust Book §5 (Structs and Methods)

/// A flattened tile grid as read from a map file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawGrid {
    /// Declared `height` attribute of the `<map>` element
    pub height: u32,

    /// Declared `width` attribute, if the map carries one
    pub width: Option<u32>,

    /// Name of the `<layer>` the data came from, if it had one
    pub layer: Option<String>,

    /// Raw text of the `<data>` element, newline and comma delimited
    pub data: String,
}

impl RawGrid {
    /// Build a grid from a declared height and raw CSV text.
    ///
    /// Example:
    ///   let grid = RawGrid::new(3, "1,5,1\n5,5,1\n1,1,1");
    pub fn new(height: u32, data: impl Into<String>) -> Self {
        Self {
            height,
            width: None,
            layer: None,
            data:  data.into(),
        }
    }
}

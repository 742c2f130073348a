// ============================================================
// Layer 3 - Map Loading Errors
// ============================================================
// Structural problems with a map file are fatal, but each one
// gets its own variant so the user sees what is actually wrong
// instead of a raw parser trace.
//
// Bad individual tokens are NOT errors; see TileCell::Malformed.
//
// Reference: Rust Book §9 (Recoverable Errors with Result)

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("cannot read map file '{path}'")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("map file is not well-formed XML: {0}")]
    Xml(#[from] xml::reader::Error),

    #[error("map has no <{0}> element")]
    MissingElement(&'static str),

    #[error("<map> element has no '{0}' attribute")]
    MissingDimension(&'static str),

    #[error("<map> attribute '{attr}' is not a non-negative integer: '{value}'")]
    InvalidDimension { attr: &'static str, value: String },

    #[error("tile data encoding '{0}' is not supported, only csv")]
    UnsupportedEncoding(String),

    #[error("map has no layer named '{0}'")]
    LayerNotFound(String),
}

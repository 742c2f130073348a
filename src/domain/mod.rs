// ============================================================
// Layer 3 - Domain Layer
// ============================================================
// Plain Rust types that describe a tile map and the walls in it.
//
// Rules for this layer:
//   - NO XML parsing here (that's Layer 4)
//   - NO GPIO or printing here (that's Layer 6 / Layer 1)
//   - Only structs, enums, errors and traits
//
// Everything here can be unit tested without touching the disk.
//
// Reference: Rust Book §5 (Structs), §6 (Enums), §10 (Traits)

// The raw grid text plus declared map dimensions
pub mod grid;

// Per-token classification and the row-origin convention
pub mod tile;

// Wall coordinates and the ordered set of them
pub mod wall;

// Typed errors for loading a map
pub mod error;

// Core abstractions (traits) that other layers implement
pub mod traits;

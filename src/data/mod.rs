// ============================================================
// Layer 4 - Map Data Pipeline
// ============================================================
// Everything between a .tmx file on disk and a list of walls:
//
//   .tmx file
//       │
//       ▼
//   TmxLoader      → parses XML, returns RawGrid (height + CSV text)
//       │
//       ▼
//   GridScanner    → classifies every token, collects WallSet
//
// Each step is independently testable: the loader parses from
// any reader, the scanner works on an in-memory RawGrid.
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Reads the map header and one CSV tile layer with xml-rs
pub mod tmx_loader;

/// Turns raw CSV grid text into wall coordinates
pub mod grid_scanner;

// ============================================================
// Layer 6 - Infrastructure Layer
// ============================================================
// The edges of the program:
//
//   report.rs - renders a WallReport as text or JSON
//   gpio.rs   - LedPin backends (Raspberry Pi via rppal,
//               or a simulated pin that just logs)
//
// Reference: Rust Book §7 (Modules)

/// Text and JSON rendering of wall reports
pub mod report;

/// Real and simulated GPIO output pins
pub mod gpio;

// ============================================================
// Layer 2 - Application / Use Cases
// ============================================================
// This layer wires the other layers together for one goal.
//
// Rules for this layer:
//   - No XML or CSV parsing here (that's Layer 4)
//   - No printing here (that's Layer 1)
//   - No direct GPIO access (that's Layer 6, behind LedPin)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Load a .tmx map and collect wall coordinates
pub mod extract_walls_use_case;

// Blink an LED until interrupted
pub mod blink_use_case;

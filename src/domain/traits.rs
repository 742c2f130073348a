// ============================================================
// Layer 3 - Core Traits (Abstractions)
// ============================================================
// The two seams of the program:
//   - GridSource: anything that can produce a RawGrid
//   - LedPin:     anything that can drive one output level
//
// Implementations:
//   - TmxLoader     implements GridSource (Layer 4)
//   - RppalPin      implements LedPin     (Layer 6, Raspberry Pi)
//   - SimulatedPin  implements LedPin     (Layer 6, any machine)
//
// The application layer only sees these traits, so the use
// cases are tested with in-memory grids and simulated pins.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;

use crate::domain::error::MapError;
use crate::domain::grid::RawGrid;

// ─── GridSource ───────────────────────────────────────────────────────────────
/// Any component that can load one tile grid.
pub trait GridSource {
    /// Load the grid, or explain which part of the map is missing.
    fn load_grid(&self) -> std::result::Result<RawGrid, MapError>;
}

/// An already-loaded grid is its own source.
impl GridSource for RawGrid {
    fn load_grid(&self) -> std::result::Result<RawGrid, MapError> {
        Ok(self.clone())
    }
}

// ─── LedPin ───────────────────────────────────────────────────────────────────
/// A single GPIO output claimed for the lifetime of the value.
/// Dropping the value releases the pin.
pub trait LedPin {
    /// Drive the pin high (`true`) or low (`false`).
    fn set_level(&mut self, high: bool) -> Result<()>;
}

/// Lets the CLI pick a backend at runtime with `Box<dyn LedPin>`
impl<P: LedPin + ?Sized> LedPin for Box<P> {
    fn set_level(&mut self, high: bool) -> Result<()> {
        (**self).set_level(high)
    }
}

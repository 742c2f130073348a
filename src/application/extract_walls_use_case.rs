// ============================================================
// Layer 2 - ExtractWallsUseCase
// ============================================================
// Orchestrates wall extraction in order:
//
//   Step 1: Load the tile grid        (Layer 4 - TmxLoader)
//   Step 2: Scan it for wall codes    (Layer 4 - GridScanner)
//   Step 3: Assemble a WallReport     (returned to Layer 1)
//
// Map path, wall code and row origin are configuration, not
// constants, so one use case serves every map variant.
//
// Reference: Rust Book §9 (Error Handling with anyhow)

use anyhow::{Context, Result};
use serde::Serialize;

use crate::data::{
    grid_scanner::{GridScanner, ScanOutcome},
    tmx_loader::TmxLoader,
};
use crate::domain::{tile::RowOrigin, traits::GridSource};

// ─── Extraction Configuration ────────────────────────────────────────────────
#[derive(Debug, Clone)]
pub struct WallsConfig {
    pub map_path:  String,
    pub wall_code: i64,
    pub origin:    RowOrigin,
    pub layer:     Option<String>,
}

impl Default for WallsConfig {
    fn default() -> Self {
        Self {
            map_path:  "assets/map_big.tmx".to_string(),
            wall_code: 2,
            origin:    RowOrigin::DeclaredHeight,
            layer:     None,
        }
    }
}

// ─── WallReport ───────────────────────────────────────────────────────────────
/// Everything one extraction run produced.
#[derive(Debug, Clone, Serialize)]
pub struct WallReport {
    pub map_path:  String,
    pub layer:     Option<String>,
    pub wall_code: i64,
    pub origin:    RowOrigin,
    pub height:    u32,
    pub width:     Option<u32>,

    /// Always equal to `scan.walls.count()`
    pub count: usize,

    #[serde(flatten)]
    pub scan: ScanOutcome,
}

// ─── ExtractWallsUseCase ─────────────────────────────────────────────────────
pub struct ExtractWallsUseCase {
    config: WallsConfig,
}

impl ExtractWallsUseCase {
    pub fn new(config: WallsConfig) -> Self {
        Self { config }
    }

    /// Load the configured .tmx file and extract its walls.
    pub fn execute(&self) -> Result<WallReport> {
        let loader = TmxLoader::new(&self.config.map_path)
            .with_layer(self.config.layer.clone());
        self.execute_with(&loader)
    }

    /// Extract walls from any grid source.
    pub fn execute_with<S: GridSource>(&self, source: &S) -> Result<WallReport> {
        let cfg = &self.config;

        // ── Step 1: Load ──────────────────────────────────────────────────────
        let grid = source
            .load_grid()
            .with_context(|| format!("Failed to load map '{}'", cfg.map_path))?;

        // ── Step 2: Scan ──────────────────────────────────────────────────────
        tracing::info!(
            "Scanning for wall code {} ({:?} row origin)",
            cfg.wall_code,
            cfg.origin
        );
        let scan = GridScanner::new(cfg.wall_code, cfg.origin).scan(&grid);

        if scan.malformed > 0 {
            tracing::warn!("{} malformed tile codes were treated as non-walls", scan.malformed);
        }
        tracing::info!("Found {} walls", scan.walls.count());

        // ── Step 3: Report ────────────────────────────────────────────────────
        Ok(WallReport {
            map_path:  cfg.map_path.clone(),
            layer:     grid.layer,
            wall_code: cfg.wall_code,
            origin:    cfg.origin,
            height:    grid.height,
            width:     grid.width,
            count:     scan.walls.count(),
            scan,
        })
    }
}

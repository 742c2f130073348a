// ============================================================
// Layer 6 - Report Rendering
// ============================================================
// Turns a WallReport into the text that goes to stdout.
//
//   Text (default):
//     [(3, 1), (2, 0), (2, 1)]
//     3
//
//   Json:
//     { "map_path": "...", "wall_code": 5, "count": 3,
//       "walls": [{ "row": 3, "col": 1 }, ...], ... }
//
// Logs go to stderr, so either format can be piped as-is.
//
// Reference: serde_json crate documentation

use anyhow::Result;

use crate::application::extract_walls_use_case::WallReport;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

pub fn render(report: &WallReport, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(format!("{}\n{}", report.scan.walls, report.count)),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

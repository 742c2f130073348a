// ============================================================
// Layer 1 - CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `walls` and `blink`
// and all their configurable flags.
//
// The old scripts hard-coded the map path, wall code and LED
// pin; here each one is a flag with the old value as default.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand, ValueEnum};

use crate::application::{blink_use_case::BlinkConfig, extract_walls_use_case::WallsConfig};
use crate::domain::tile::RowOrigin;
use crate::infra::report::ReportFormat;

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the coordinates of every wall tile in a Tiled .tmx map
    Walls(WallsArgs),

    /// Blink an LED on a GPIO pin once per period until Ctrl-C
    Blink(BlinkArgs),
}

/// Row numbering for the first line of the tile grid
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum OriginArg {
    /// Top row is numbered `height`
    DeclaredHeight,
    /// Top row is numbered `height - 1`
    HeightMinusOne,
}

impl From<OriginArg> for RowOrigin {
    fn from(o: OriginArg) -> Self {
        match o {
            OriginArg::DeclaredHeight => RowOrigin::DeclaredHeight,
            OriginArg::HeightMinusOne => RowOrigin::HeightMinusOne,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum FormatArg {
    /// Coordinate list followed by the count
    Text,
    /// Full report as pretty-printed JSON
    Json,
}

impl From<FormatArg> for ReportFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Text => ReportFormat::Text,
            FormatArg::Json => ReportFormat::Json,
        }
    }
}

/// All arguments for the `walls` command.
#[derive(Args, Debug)]
pub struct WallsArgs {
    /// Path to the .tmx map file
    #[arg(long, default_value = "assets/map_big.tmx")]
    pub map: String,

    /// Tile code that marks a wall
    #[arg(long, default_value_t = 2, allow_negative_numbers = true)]
    pub wall_code: i64,

    /// Row number of the first grid line
    #[arg(long, value_enum, default_value_t = OriginArg::DeclaredHeight)]
    pub origin: OriginArg,

    /// Read this layer instead of the first one
    #[arg(long)]
    pub layer: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = FormatArg::Text)]
    pub format: FormatArg,
}

impl From<&WallsArgs> for WallsConfig {
    fn from(a: &WallsArgs) -> Self {
        WallsConfig {
            map_path:  a.map.clone(),
            wall_code: a.wall_code,
            origin:    a.origin.into(),
            layer:     a.layer.clone(),
        }
    }
}

/// All arguments for the `blink` command
#[derive(Args, Debug)]
pub struct BlinkArgs {
    /// BCM number of the LED pin
    #[arg(long, default_value_t = 24)]
    pub pin: u8,

    /// Milliseconds spent in each level
    #[arg(long, default_value_t = 1000, value_parser = clap::value_parser!(u64).range(1..))]
    pub period_ms: u64,

    /// Log levels instead of driving real hardware (automatic off a Raspberry Pi)
    #[arg(long)]
    pub simulate: bool,
}

impl From<BlinkArgs> for BlinkConfig {
    fn from(a: BlinkArgs) -> Self {
        BlinkConfig {
            pin:       a.pin,
            period_ms: a.period_ms,
            simulate:  a.simulate,
        }
    }
}

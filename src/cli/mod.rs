// ============================================================
// Layer 1 - CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction. Parses arguments with
// clap and hands the work to Layer 2.
//
// Two commands are supported:
//   1. `walls` - extract wall coordinates from a .tmx map
//   2. `blink` - blink an LED until Ctrl-C
//
// Only this layer writes to stdout.
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use commands::{BlinkArgs, Commands, WallsArgs};
use tracing_subscriber::EnvFilter;

use crate::application::{
    blink_use_case::{BlinkConfig, BlinkUseCase},
    extract_walls_use_case::ExtractWallsUseCase,
};
use crate::infra::{gpio, report};

#[derive(Parser, Debug)]
#[command(
    name = "wallmap",
    version,
    about = "Extract wall tiles from Tiled maps, or blink a GPIO LED."
)]
pub struct Cli {
    /// More log output on stderr (-v debug, -vv per-cell trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// The subcommand to run (walls or blink)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Log directive for this crate given the -v count
    pub fn log_directive(&self) -> &'static str {
        match self.verbose {
            0 => "wallmap=info",
            1 => "wallmap=debug",
            _ => "wallmap=trace",
        }
    }

    /// Build the log filter from a RUST_LOG value, if any.
    ///
    /// RUST_LOG wins over the built-in `wallmap=info` default;
    /// an explicit -v flag is layered on top of either.
    pub fn env_filter(&self, rust_log: Option<&str>) -> Result<EnvFilter> {
        let filter = match rust_log.filter(|v| !v.trim().is_empty()) {
            Some(spec) => EnvFilter::try_new(spec)
                .with_context(|| format!("Invalid RUST_LOG value '{spec}'"))?,
            None => EnvFilter::new("wallmap=info"),
        };

        if self.verbose == 0 {
            return Ok(filter);
        }
        Ok(filter.add_directive(self.log_directive().parse()?))
    }

    /// Match on the subcommand and dispatch to the correct use case.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Walls(args) => run_walls(args),
            Commands::Blink(args) => run_blink(args),
        }
    }
}

/// Handles the `walls` subcommand.
fn run_walls(args: WallsArgs) -> Result<()> {
    tracing::info!("Extracting walls from '{}'", args.map);

    let use_case = ExtractWallsUseCase::new((&args).into());
    let report   = use_case.execute()?;

    println!("{}", report::render(&report, args.format.into())?);
    Ok(())
}

/// Handles the `blink` subcommand.
/// Runs the blink loop on a single-threaded runtime until Ctrl-C.
fn run_blink(args: BlinkArgs) -> Result<()> {
    let config: BlinkConfig = args.into();
    let pin = gpio::open_pin(config.pin, config.simulate)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Cannot start async runtime")?;

    println!("Blinking GPIO {}. Press Ctrl+C to stop.", config.pin);

    let mut use_case = BlinkUseCase::new(pin, config.period());
    let writes = runtime.block_on(use_case.run_until(async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Cannot listen for Ctrl-C: {}", e);
        }
    }))?;

    tracing::info!("LED released after {} level changes", writes);
    Ok(())
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::extract_walls_use_case::WallsConfig;
    use crate::domain::tile::RowOrigin;
    use tracing::Level;
    use tracing_subscriber::layer::SubscriberExt;

    /// Whether a trace event from the scanner passes the filter
    fn scanner_trace_enabled(filter: EnvFilter) -> bool {
        let subscriber = tracing_subscriber::registry().with(filter);
        tracing::subscriber::with_default(subscriber, || {
            tracing::enabled!(target: "wallmap::data::grid_scanner", Level::TRACE)
        })
    }

    #[test]
    fn test_walls_defaults_match_old_constants() {
        let cli = Cli::try_parse_from(["wallmap", "walls"]).unwrap();
        let Commands::Walls(args) = &cli.command else {
            panic!("expected walls subcommand");
        };

        let config: WallsConfig = args.into();
        assert_eq!(config.map_path, "assets/map_big.tmx");
        assert_eq!(config.wall_code, 2);
        assert_eq!(config.origin, RowOrigin::DeclaredHeight);
        assert_eq!(config.layer, None);
    }

    #[test]
    fn test_walls_flags() {
        let cli = Cli::try_parse_from([
            "wallmap", "-vv", "walls",
            "--map", "level.tmx",
            "--wall-code", "5",
            "--origin", "height-minus-one",
            "--layer", "walls",
            "--format", "json",
        ])
        .unwrap();
        assert_eq!(cli.log_directive(), "wallmap=trace");

        let Commands::Walls(args) = &cli.command else {
            panic!("expected walls subcommand");
        };
        let config: WallsConfig = args.into();
        assert_eq!(config.wall_code, 5);
        assert_eq!(config.origin, RowOrigin::HeightMinusOne);
        assert_eq!(config.layer.as_deref(), Some("walls"));
    }

    #[test]
    fn test_blink_defaults() {
        let cli = Cli::try_parse_from(["wallmap", "blink", "--simulate"]).unwrap();
        let Commands::Blink(args) = cli.command else {
            panic!("expected blink subcommand");
        };

        let config: BlinkConfig = args.into();
        assert_eq!(config.pin, 24);
        assert_eq!(config.period_ms, 1000);
        assert!(config.simulate);
    }

    #[test]
    fn test_zero_period_rejected() {
        assert!(Cli::try_parse_from(["wallmap", "blink", "--period-ms", "0"]).is_err());
    }

    #[test]
    fn test_rust_log_enables_trace_without_flags() {
        let cli    = Cli::try_parse_from(["wallmap", "walls"]).unwrap();
        let filter = cli.env_filter(Some("wallmap=trace")).unwrap();
        assert!(scanner_trace_enabled(filter));
    }

    #[test]
    fn test_default_filter_hides_trace() {
        let cli    = Cli::try_parse_from(["wallmap", "walls"]).unwrap();
        let filter = cli.env_filter(None).unwrap();
        assert!(!scanner_trace_enabled(filter));
    }

    #[test]
    fn test_verbose_flag_raises_level() {
        let cli    = Cli::try_parse_from(["wallmap", "-vv", "walls"]).unwrap();
        let filter = cli.env_filter(Some("warn")).unwrap();
        assert!(scanner_trace_enabled(filter));
    }

    #[test]
    fn test_invalid_rust_log_is_an_error() {
        let cli = Cli::try_parse_from(["wallmap", "walls"]).unwrap();
        assert!(cli.env_filter(Some("wallmap=loud")).is_err());
    }
}

mod cli;
mod application;
mod domain;
mod data;
mod infra;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let rust_log = std::env::var("RUST_LOG").ok();

    // Logs go to stderr; stdout is reserved for the report
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(cli.env_filter(rust_log.as_deref())?)
        .init();

    cli.run()
}

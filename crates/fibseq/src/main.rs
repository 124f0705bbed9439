//! fibseq: Fibonacci sequence generator and number lookup.

use anyhow::Result;
use fibseq_lib::{app, config};
use tracing::Level;

fn main() -> Result<()> {
    let config = config::AppConfig::parse();

    let level = if config.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    let code = app::run(&config)?;
    std::process::exit(code)
}

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use stockroom::cli::{Cli, MenuSession};
use stockroom::config::StockroomConfig;
use stockroom::store;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => StockroomConfig::load(path)?,
        None => StockroomConfig::default(),
    };

    // Precedence: CLI flag, then config file, then default.
    let directive = cli
        .log_level
        .map(|level| level.to_filter_directive().to_string())
        .or_else(|| config.log_level.clone())
        .unwrap_or_else(|| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(directive))
        .with_writer(std::io::stderr)
        .init();

    let data_file = cli
        .data_file
        .or(config.data_file)
        .unwrap_or_else(store::paths::default_data_file);

    let mut session = MenuSession::new(data_file);
    session.run()?;
    Ok(())
}

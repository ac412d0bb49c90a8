use std::num::NonZeroUsize;
use std::path::PathBuf;

use anyhow::Context;
use catalog_dash::config::Config;
use catalog_dash::logging::init_tracing;
use catalog_dash::ui;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "catalog-dash", version, about = "Terminal dashboard for a product catalog")]
struct Cli {
    /// Path to the config file (defaults to the user config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the catalog API base URL
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Override the initial page size
    #[arg(long, value_name = "N")]
    page_size: Option<NonZeroUsize>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let path = cli.config.unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&path)?;

    if let Some(base_url) = cli.base_url {
        config.catalog.base_url = base_url;
    }
    if let Some(page_size) = cli.page_size {
        config.view.page_size = page_size.get();
    }
    config.validate()?;

    let log_path = init_tracing(&config.logging).context("failed to open log file")?;
    tracing::info!(config = %path.display(), log = %log_path.display(), "catalog-dash starting");

    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    ui::runtime::run(&config, runtime.handle())?;

    runtime.shutdown_background();
    tracing::info!("catalog-dash stopped");
    Ok(())
}

use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use hireview_catalog::JobCatalog;
use hireview_tui::RunOptions;

/// Terminal dashboard for AI-assisted resume screening.
#[derive(Debug, Parser)]
#[command(name = "hireview", version, about)]
struct Cli {
    /// Theme name ("slate" or "ansi256").
    #[arg(long)]
    theme: Option<String>,

    /// Milliseconds the simulated analysis takes per batch.
    #[arg(long, default_value_t = 3000)]
    analysis_delay_ms: u64,

    /// Write logs to this file; without it, logging is discarded so it
    /// cannot corrupt the terminal UI.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref())?;

    let catalog = JobCatalog::from_embedded().context("loading embedded job catalog")?;
    tracing::info!(positions = catalog.len(), "catalog loaded");

    hireview_tui::run(
        catalog,
        RunOptions {
            theme: cli.theme,
            analysis_delay: Duration::from_millis(cli.analysis_delay_ms),
        },
    )
    .await
}

fn init_tracing(log_file: Option<&std::path::Path>) -> Result<()> {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    match log_file {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
            let writer = Arc::new(file);
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .try_init();
        }
        None => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::sink)
                .try_init();
        }
    }
    Ok(())
}

//! Pozos Report - Main Entry Point

use anyhow::{Context, Result};
use clap::Parser;
use pozos_config::ConfigLoader;
use pozos_report::ReportApp;
use std::path::PathBuf;
use tracing::{error, info};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path (TOML or YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `pozos_graphs=trace`
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = ConfigLoader::load(args.config.as_deref()).context("failed to load configuration")?;
    let app = ReportApp::new(config);
    app.init_logging(args.log_level.as_deref())?;

    info!("Starting Pozos production report");

    match app.run().await {
        Ok(summary) => {
            for path in &summary.written {
                info!("Wrote {}", path.display());
            }
            Ok(())
        }
        Err(e) if e.is_input_error() => {
            error!("Input rejected, no charts written: {}", e);
            Err(e).context("production report failed")
        }
        Err(e) => {
            error!("Report failed: {}", e);
            Err(e).context("production report failed")
        }
    }
}

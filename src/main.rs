use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info, warn};

use studiobot::config as cfg;
use studiobot::dom::CdpDocument;
use studiobot::executor::Runtime;

/// studiobot CLI
#[derive(Debug, Parser)]
#[command(
    name = studiobot::PKG_NAME,
    version = studiobot::PKG_VERSION,
    about = "Bulk-publish YouTube Studio drafts or sort a playlist by driving a signed-in browser tab"
)]
struct Args {
    /// Path to the JSON configuration file
    #[arg(short = 'c', long = "config", default_value = "config/studiobot.json")]
    config: PathBuf,

    /// Enable dry-run mode (find and order items, but do not click anything)
    #[arg(long = "dry-run")]
    dry_run: bool,

    /// Set log level (e.g., trace, debug, info, warn, error). Overrides RUST_LOG.
    #[arg(long = "log-level", value_parser = parse_log_level)]
    log_level: Option<tracing::Level>,

    /// Print the JSON Schema for the configuration and exit
    #[arg(long = "print-schema")]
    print_schema: bool,
}

fn parse_log_level(s: &str) -> Result<tracing::Level, String> {
    studiobot::parse_level(s).ok_or_else(|| {
        format!("unknown log level '{s}' (expected trace, debug, info, warn or error)")
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.print_schema {
        let schema = cfg::generate_schema();
        let json = serde_json::to_string_pretty(&schema)?;
        println!("{json}");
        return Ok(());
    }

    // Load configuration before logging so its `debug` flag can pick the level.
    let config = cfg::load_from_path_async(&args.config).await?;

    match args.log_level {
        Some(level) => {
            let _ = tracing_subscriber::fmt().with_max_level(level).try_init();
        }
        None => studiobot::init_tracing(config.debug),
    }
    info!(
        version = studiobot::PKG_VERSION,
        config = %args.config.display(),
        mode = ?config.mode,
        dry_run = args.dry_run,
        "Starting studiobot"
    );
    debug!(target: "studiobot", ?config, "Configuration loaded successfully");

    let doc = CdpDocument::connect(&config.browser).await?;
    let runtime = Runtime::new(config, Arc::new(doc), args.dry_run);

    tokio::select! {
        result = runtime.run() => {
            let report = result.context("Workflow stopped")?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        _ = tokio::signal::ctrl_c() => {
            warn!("Received Ctrl+C, stopping; items already processed are kept");
        }
    }

    info!("studiobot exited");
    Ok(())
}

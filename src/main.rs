//! Nexus Sync - Main Entry Point

use clap::Parser;

use nexus_sync::cli::Cli;
use nexus_sync::config::SyncConfig;
use nexus_sync::error::Result;
use nexus_sync::services::sync_service::SyncService;
use nexus_sync::telemetry;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = SyncConfig::from_file(&cli.config)?;

    // Initialize tracing
    telemetry::init_tracing(&config.log_level);

    tracing::info!(
        source = %config.source,
        target = %config.target,
        artifacts = config.artifacts.len(),
        "Starting Nexus artifact sync"
    );

    let service = SyncService::new(config, cli.dry_run);
    if let Err(e) = service.run().await {
        tracing::error!(error = %e, "Migration failed");
        std::process::exit(1);
    }

    Ok(())
}

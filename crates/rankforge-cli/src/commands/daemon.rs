//! Sweep-daemon command implementation.

use crate::cli::SweepDaemonArgs;
use crate::error::Result;
use rankforge_janitor::{JanitorConfig, JanitorWorker};
use rankforge_store::SqliteStore;

/// Execute the sweep-daemon command: run scheduled sweeps until Ctrl+C.
pub async fn execute_daemon(args: SweepDaemonArgs, store: SqliteStore) -> Result<()> {
    // Log to stderr so stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut config = JanitorConfig {
        dry_run: args.dry_run,
        ..Default::default()
    };
    if let Some(minutes) = args.interval {
        config.sweep_interval_minutes = minutes;
    }

    let catalog = store.catalog_snapshot()?;
    let mut worker = JanitorWorker::new(config);
    worker.run(store, catalog).await?;
    Ok(())
}

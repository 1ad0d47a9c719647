//! Background worker for continuous Janitor operation

use crate::{Janitor, JanitorConfig, JanitorError};
use rankforge_domain::traits::RankStore;
use rankforge_domain::RankCatalog;
use tokio::time::interval;

/// Background worker that runs Janitor sweeps on a schedule
///
/// # Examples
///
/// ```no_run
/// use rankforge_janitor::{JanitorWorker, JanitorConfig};
/// use rankforge_store::SqliteStore;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let store = SqliteStore::new("rankforge.db")?;
///     let catalog = store.catalog_snapshot()?;
///     let mut worker = JanitorWorker::new(JanitorConfig::default());
///
///     // Run indefinitely (until Ctrl+C)
///     worker.run(store, catalog).await?;
///     Ok(())
/// }
/// ```
pub struct JanitorWorker {
    janitor: Janitor,
    config: JanitorConfig,
}

impl JanitorWorker {
    /// Create a new background worker with the given configuration
    pub fn new(config: JanitorConfig) -> Self {
        Self {
            janitor: Janitor::new(config.clone()),
            config,
        }
    }

    /// Create a worker with default configuration
    pub fn default_config() -> Self {
        Self::new(JanitorConfig::default())
    }

    /// Run the worker indefinitely
    ///
    /// Runs a sweep at the configured interval until a shutdown signal
    /// (Ctrl+C) is received. A failed sweep is logged and the schedule
    /// continues.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured interval is zero.
    pub async fn run<S, C>(&mut self, mut store: S, catalog: C) -> Result<(), JanitorError>
    where
        S: RankStore,
        S::Error: std::fmt::Display,
        C: RankCatalog,
    {
        let period = self.validated_interval()?;
        let mut ticker = interval(period);

        tracing::info!("Janitor worker started (interval: {:?})", period);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    tracing::debug!("Starting sweep cycle");

                    match self.janitor.sweep(&mut store, &catalog) {
                        Ok(report) => {
                            tracing::info!(
                                "Sweep completed: {} of {} users affected, {} failed",
                                report.affected(),
                                report.scanned,
                                report.failures.len()
                            );
                        }
                        Err(e) => {
                            tracing::error!("Sweep failed: {}", e);
                        }
                    }
                }
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("Shutdown signal received, stopping janitor");
                    break;
                }
            }
        }

        let metrics = self.janitor.metrics();
        tracing::info!("Janitor stopped. Final metrics:\n{}", metrics.summary());

        Ok(())
    }

    /// Run for a specific number of cycles (useful for testing)
    pub async fn run_cycles<S, C>(
        &mut self,
        mut store: S,
        catalog: C,
        cycles: usize,
    ) -> Result<(), JanitorError>
    where
        S: RankStore,
        S::Error: std::fmt::Display,
        C: RankCatalog,
    {
        let period = self.validated_interval()?;
        let mut ticker = interval(period);

        tracing::info!(
            "Janitor worker started for {} cycles (interval: {:?})",
            cycles,
            period
        );

        for cycle in 0..cycles {
            ticker.tick().await;

            tracing::debug!("Starting sweep cycle {}/{}", cycle + 1, cycles);

            let report = self.janitor.sweep(&mut store, &catalog)?;
            tracing::info!(
                "Sweep {}/{} completed: {} of {} users affected",
                cycle + 1,
                cycles,
                report.affected(),
                report.scanned
            );
        }

        Ok(())
    }

    /// Get a reference to the janitor's current metrics
    pub fn metrics(&self) -> &crate::JanitorMetrics {
        self.janitor.metrics()
    }

    /// Reset the janitor's metrics counters
    pub fn reset_metrics(&mut self) {
        self.janitor.reset_metrics();
    }

    fn validated_interval(&self) -> Result<std::time::Duration, JanitorError> {
        let period = self.config.sweep_interval();
        if period.is_zero() {
            return Err(JanitorError::Config(
                "sweep_interval_minutes must be at least 1".to_string(),
            ));
        }
        Ok(period)
    }
}

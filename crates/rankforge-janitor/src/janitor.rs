//! Core Janitor implementation for rank-set reconciliation
//!
//! This is the single call site for normalization: grant and purchase flows
//! append tokens verbatim and the Janitor reconciles them, either on demand
//! (per user) or as a batch sweep.

use crate::{JanitorConfig, JanitorError, JanitorMetrics};
use rankforge_domain::traits::RankStore;
use rankforge_domain::{normalize_with_diff, RankCatalog, RankId};
use serde::Serialize;
use std::time::SystemTime;

/// Result of fixing one user's rank set.
///
/// `removed`/`kept` is the reporting contract callers serialize back to
/// whoever invoked the fix.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct UserFix {
    /// The user whose ranks were examined
    pub username: String,
    /// Input tokens no longer present after normalization
    pub removed: Vec<String>,
    /// The normalized rank set
    pub kept: Vec<String>,
    /// Whether the stored set differs from the input
    pub changed: bool,
}

/// One user that could not be fixed during a sweep
#[derive(Debug, Clone, Serialize)]
pub struct SweepFailure {
    /// The user whose fix failed
    pub username: String,
    /// The store error, stringified for reporting
    pub error: String,
}

/// Result of a batch sweep across all users
#[derive(Debug, Clone, Serialize)]
pub struct SweepReport {
    /// Users examined
    pub scanned: usize,
    /// Per-user diffs for users whose set changed
    pub changed: Vec<UserFix>,
    /// Users skipped because their fix failed
    pub failures: Vec<SweepFailure>,
    /// Whether this sweep ran without persisting
    pub dry_run: bool,
}

impl SweepReport {
    /// Number of users whose rank set changed
    pub fn affected(&self) -> usize {
        self.changed.len()
    }
}

/// Janitor service for rank-set cleanup
///
/// Responsible for:
/// - Fixing a single user's rank set on demand
/// - Sweeping every user record, isolating per-user failures
/// - Collecting metrics on cleanup operations
///
/// # Examples
///
/// ```no_run
/// use rankforge_janitor::{Janitor, JanitorConfig};
/// use rankforge_store::SqliteStore;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut store = SqliteStore::new("rankforge.db")?;
/// let catalog = store.catalog_snapshot()?;
/// let mut janitor = Janitor::new(JanitorConfig::default());
///
/// let report = janitor.sweep(&mut store, &catalog)?;
/// println!("{} of {} users affected", report.affected(), report.scanned);
/// # Ok(())
/// # }
/// ```
pub struct Janitor {
    config: JanitorConfig,
    metrics: JanitorMetrics,
}

impl Janitor {
    /// Create a new Janitor with the given configuration
    pub fn new(config: JanitorConfig) -> Self {
        Self {
            config,
            metrics: JanitorMetrics::new(),
        }
    }

    /// Create a Janitor with default configuration
    pub fn default_config() -> Self {
        Self::new(JanitorConfig::default())
    }

    /// Get a reference to the current metrics
    pub fn metrics(&self) -> &JanitorMetrics {
        &self.metrics
    }

    /// Reset metrics counters
    pub fn reset_metrics(&mut self) {
        self.metrics.reset();
    }

    /// Fix one user's rank set.
    ///
    /// Loads the set, normalizes it against the catalog, and persists the
    /// result only if it changed (and dry-run is off). Returns `Ok(None)`
    /// when the user has no rank record at all.
    pub fn fix_user<S, C>(
        &mut self,
        store: &mut S,
        catalog: &C,
        username: &str,
    ) -> Result<Option<UserFix>, JanitorError>
    where
        S: RankStore,
        S::Error: std::fmt::Display,
        C: RankCatalog,
    {
        let Some(ranks) = store
            .load_ranks(username)
            .map_err(|e| JanitorError::Store(e.to_string()))?
        else {
            return Ok(None);
        };

        let outcome = normalize_with_diff(&ranks, catalog);
        let changed = outcome.changed(&ranks);
        let upgrades_applied = ranks.iter().filter(|rank| rank.is_upgrade()).count();

        if changed {
            if self.config.dry_run {
                tracing::info!(
                    username,
                    removed = outcome.removed.len(),
                    "DRY RUN: would normalize rank set"
                );
            } else {
                store
                    .save_ranks(username, &outcome.kept)
                    .map_err(|e| JanitorError::Store(e.to_string()))?;
                tracing::info!(
                    username,
                    removed = outcome.removed.len(),
                    kept = outcome.kept.len(),
                    "normalized rank set"
                );
            }
        }

        self.metrics
            .record_fix(changed, outcome.removed.len(), upgrades_applied);

        Ok(Some(UserFix {
            username: username.to_string(),
            removed: into_tokens(outcome.removed),
            kept: into_tokens(outcome.kept),
            changed,
        }))
    }

    /// Sweep every user record.
    ///
    /// A user whose fix fails is reported in `failures` and does not abort
    /// the rest of the batch.
    pub fn sweep<S, C>(&mut self, store: &mut S, catalog: &C) -> Result<SweepReport, JanitorError>
    where
        S: RankStore,
        S::Error: std::fmt::Display,
        C: RankCatalog,
    {
        let start = SystemTime::now();

        let users = store
            .list_users()
            .map_err(|e| JanitorError::Store(e.to_string()))?;

        let mut report = SweepReport {
            scanned: 0,
            changed: Vec::new(),
            failures: Vec::new(),
            dry_run: self.config.dry_run,
        };

        for username in users {
            report.scanned += 1;
            match self.fix_user(store, catalog, &username) {
                Ok(Some(fix)) if fix.changed => report.changed.push(fix),
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!(username = %username, error = %e, "skipping user, fix failed");
                    self.metrics.record_failure();
                    report.failures.push(SweepFailure {
                        username,
                        error: e.to_string(),
                    });
                }
            }
        }

        self.metrics.record_sweep();
        if let Ok(elapsed) = start.elapsed() {
            self.metrics.total_runtime_secs += elapsed.as_secs();
        }

        Ok(report)
    }
}

fn into_tokens(ranks: Vec<RankId>) -> Vec<String> {
    ranks.into_iter().map(RankId::into_inner).collect()
}

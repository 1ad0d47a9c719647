//! Metrics collection for Janitor operations

/// Metrics collected during Janitor operations
///
/// Tracks users scanned, changed, and failed, plus token-level counts.
#[derive(Debug, Clone, Default)]
pub struct JanitorMetrics {
    /// Users whose rank set was loaded and examined
    pub users_scanned: usize,

    /// Users whose rank set actually changed (or would, in dry-run)
    pub users_changed: usize,

    /// Users skipped because their fix failed
    pub users_failed: usize,

    /// Tokens dropped across all fixes (upgrade tokens and superseded sources)
    pub tokens_removed: usize,

    /// Upgrade tokens consumed across all fixes
    pub upgrades_applied: usize,

    /// Total sweep iterations completed
    pub sweep_count: usize,

    /// Total runtime in seconds
    pub total_runtime_secs: u64,
}

impl JanitorMetrics {
    /// Create new empty metrics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one examined user
    pub fn record_fix(&mut self, changed: bool, tokens_removed: usize, upgrades_applied: usize) {
        self.users_scanned += 1;
        if changed {
            self.users_changed += 1;
        }
        self.tokens_removed += tokens_removed;
        self.upgrades_applied += upgrades_applied;
    }

    /// Record a user whose fix failed
    pub fn record_failure(&mut self) {
        self.users_scanned += 1;
        self.users_failed += 1;
    }

    /// Record a sweep cycle completion
    pub fn record_sweep(&mut self) {
        self.sweep_count += 1;
    }

    /// Reset all metrics
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Generate a summary report of metrics
    pub fn summary(&self) -> String {
        let lines = vec![
            "Janitor Metrics Summary".to_string(),
            "======================".to_string(),
            format!("Sweep cycles: {}", self.sweep_count),
            format!("Total runtime: {}s", self.total_runtime_secs),
            format!("Users scanned: {}", self.users_scanned),
            format!("Users changed: {}", self.users_changed),
            format!("Users failed: {}", self.users_failed),
            format!("Tokens removed: {}", self.tokens_removed),
            format!("Upgrades applied: {}", self.upgrades_applied),
        ];
        lines.join("\n")
    }
}

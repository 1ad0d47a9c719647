//! Configuration for Janitor operations

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the Janitor service
///
/// Controls the sweep schedule and whether fixes are persisted.
///
/// # Examples
///
/// ```
/// use rankforge_janitor::JanitorConfig;
///
/// // Default configuration (hourly sweeps, persisting)
/// let config = JanitorConfig::default();
/// assert_eq!(config.sweep_interval_minutes, 60);
///
/// // Frequent sweeps, e.g. right after a shop sale
/// let config = JanitorConfig::frequent();
/// assert_eq!(config.sweep_interval_minutes, 15);
///
/// // Nightly batch
/// let config = JanitorConfig::nightly();
/// assert_eq!(config.sweep_interval_minutes, 1440);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JanitorConfig {
    /// How often the background worker runs a sweep (in minutes)
    /// Default: every 60 minutes
    pub sweep_interval_minutes: u64,

    /// Dry-run mode: compute and report diffs without persisting anything
    /// Default: false
    #[serde(default)]
    pub dry_run: bool,
}

impl Default for JanitorConfig {
    fn default() -> Self {
        Self {
            sweep_interval_minutes: 60,
            dry_run: false,
        }
    }
}

impl JanitorConfig {
    /// Frequent sweeps (every 15 minutes).
    ///
    /// Suitable while upgrade purchases are coming in steadily and pending
    /// tokens should not linger.
    pub fn frequent() -> Self {
        Self {
            sweep_interval_minutes: 15,
            dry_run: false,
        }
    }

    /// Nightly sweeps (every 24 hours).
    ///
    /// Suitable for quiet servers where reconciliation can wait for the
    /// maintenance window.
    pub fn nightly() -> Self {
        Self {
            sweep_interval_minutes: 1440,
            dry_run: false,
        }
    }

    /// Get sweep interval as Duration
    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_minutes * 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = JanitorConfig::default();
        assert_eq!(config.sweep_interval_minutes, 60);
        assert!(!config.dry_run);
    }

    #[test]
    fn test_presets() {
        assert!(
            JanitorConfig::frequent().sweep_interval_minutes
                < JanitorConfig::default().sweep_interval_minutes
        );
        assert!(
            JanitorConfig::nightly().sweep_interval_minutes
                > JanitorConfig::default().sweep_interval_minutes
        );
    }

    #[test]
    fn test_duration_conversion() {
        let config = JanitorConfig::default();
        assert_eq!(config.sweep_interval(), Duration::from_secs(60 * 60));
    }

    #[test]
    fn test_toml_dry_run_defaults_off() {
        let config: JanitorConfig = toml::from_str("sweep_interval_minutes = 30").unwrap();
        assert_eq!(config.sweep_interval_minutes, 30);
        assert!(!config.dry_run);
    }
}

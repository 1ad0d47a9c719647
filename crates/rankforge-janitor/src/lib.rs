//! Rankforge Janitor
//!
//! Cleanup service for user rank sets: applies pending upgrade tokens and
//! drops superseded ranks, per user or as a batch sweep.
//!
//! # Overview
//!
//! The Janitor is responsible for:
//! - **Per-user fixes**: normalize one user's rank set on demand
//! - **Batch sweeps**: normalize every user record, isolating failures
//! - **Dry runs**: report what a sweep would change without persisting
//! - **Metrics collection**: tracking cleanup operations for monitoring
//!
//! This crate is the single normalization call site: grant and purchase
//! flows append tokens verbatim (including `<source>_to_<destination>`
//! upgrade tokens) and reconciliation happens here.
//!
//! # Usage
//!
//! ## One-time Sweep
//!
//! ```no_run
//! use rankforge_janitor::{Janitor, JanitorConfig};
//! use rankforge_store::SqliteStore;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut store = SqliteStore::new("rankforge.db")?;
//! let catalog = store.catalog_snapshot()?;
//! let mut janitor = Janitor::default_config();
//!
//! let report = janitor.sweep(&mut store, &catalog)?;
//! println!("{}", janitor.metrics().summary());
//! # Ok(())
//! # }
//! ```
//!
//! ## Background Worker
//!
//! ```no_run
//! use rankforge_janitor::{JanitorWorker, JanitorConfig};
//! use rankforge_store::SqliteStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = SqliteStore::new("rankforge.db")?;
//!     let catalog = store.catalog_snapshot()?;
//!     let mut worker = JanitorWorker::new(JanitorConfig::default());
//!
//!     // Run indefinitely (until Ctrl+C)
//!     worker.run(store, catalog).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Configuration
//!
//! The Janitor can be configured via TOML:
//!
//! ```toml
//! sweep_interval_minutes = 60
//! dry_run = false
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod janitor;
mod metrics;
mod worker;

pub use config::JanitorConfig;
pub use error::JanitorError;
pub use janitor::{Janitor, SweepFailure, SweepReport, UserFix};
pub use metrics::JanitorMetrics;
pub use worker::JanitorWorker;

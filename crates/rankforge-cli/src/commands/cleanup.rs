//! Cleanup command implementation.

use crate::cli::CleanupArgs;
use crate::error::Result;
use crate::output::Formatter;
use rankforge_janitor::{Janitor, JanitorConfig};
use rankforge_store::SqliteStore;

/// Execute the cleanup command: sweep every user record.
pub fn execute_cleanup(
    args: CleanupArgs,
    store: &mut SqliteStore,
    formatter: &Formatter,
) -> Result<()> {
    let catalog = store.catalog_snapshot()?;
    let config = JanitorConfig {
        dry_run: args.dry_run,
        ..Default::default()
    };
    let mut janitor = Janitor::new(config);

    let report = janitor.sweep(store, &catalog)?;
    println!("{}", formatter.format_sweep(&report)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use rankforge_domain::traits::RankStore;
    use rankforge_domain::{CategoryId, RankId, RankInfo};

    fn seeded_store() -> SqliteStore {
        let mut store = SqliteStore::new(":memory:").unwrap();
        for (id, category) in [("vip", "rank"), ("vip_plus", "rank")] {
            store
                .upsert_catalog_entry(&RankInfo {
                    id: RankId::new(id),
                    name: id.to_string(),
                    category: CategoryId::new(category),
                    price_cents: 0,
                })
                .unwrap();
        }
        store
    }

    #[test]
    fn test_cleanup_fixes_all_users() {
        let mut store = seeded_store();
        store
            .save_ranks("steve", &[RankId::new("vip_to_vip_plus")])
            .unwrap();
        store
            .save_ranks("alex", &[RankId::new("vip")])
            .unwrap();
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        let args = CleanupArgs { dry_run: false };
        execute_cleanup(args, &mut store, &formatter).unwrap();

        assert_eq!(
            store.load_ranks("steve").unwrap().unwrap(),
            vec![RankId::new("vip_plus")]
        );
        assert_eq!(
            store.load_ranks("alex").unwrap().unwrap(),
            vec![RankId::new("vip")]
        );
    }

    #[test]
    fn test_cleanup_dry_run_persists_nothing() {
        let mut store = seeded_store();
        store
            .save_ranks("steve", &[RankId::new("vip_to_vip_plus")])
            .unwrap();
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        let args = CleanupArgs { dry_run: true };
        execute_cleanup(args, &mut store, &formatter).unwrap();

        assert_eq!(
            store.load_ranks("steve").unwrap().unwrap(),
            vec![RankId::new("vip_to_vip_plus")]
        );
    }
}

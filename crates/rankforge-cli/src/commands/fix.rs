//! Fix command implementation.

use crate::cli::FixArgs;
use crate::error::Result;
use crate::output::Formatter;
use rankforge_janitor::Janitor;
use rankforge_store::SqliteStore;

/// Execute the fix command: normalize one user's rank set.
pub fn execute_fix(args: FixArgs, store: &mut SqliteStore, formatter: &Formatter) -> Result<()> {
    let catalog = store.catalog_snapshot()?;
    let mut janitor = Janitor::default_config();

    match janitor.fix_user(store, &catalog, &args.username)? {
        Some(fix) => {
            println!("{}", formatter.format_fix(&fix)?);
        }
        None => {
            println!(
                "{}",
                formatter.warning(&format!("No rank record for '{}'", args.username))
            );
        }
    }
    Ok(())
}

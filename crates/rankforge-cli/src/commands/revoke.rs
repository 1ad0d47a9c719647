//! Revoke command implementation.

use crate::cli::RevokeArgs;
use crate::error::Result;
use crate::output::Formatter;
use rankforge_domain::traits::RankStore;
use rankforge_domain::RankId;
use rankforge_store::SqliteStore;

/// Execute the revoke command.
pub fn execute_revoke(
    args: RevokeArgs,
    store: &mut SqliteStore,
    formatter: &Formatter,
) -> Result<()> {
    let rank = RankId::new(args.rank.trim());

    if store.revoke_rank(&args.username, &rank)? {
        println!(
            "{}",
            formatter.success(&format!("Revoked {} from {}", rank, args.username))
        );
    } else {
        println!(
            "{}",
            formatter.warning(&format!("{} does not hold {}", args.username, rank))
        );
    }
    Ok(())
}

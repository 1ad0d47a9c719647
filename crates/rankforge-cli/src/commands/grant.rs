//! Grant command implementation.

use crate::cli::GrantArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use rankforge_domain::traits::RankStore;
use rankforge_domain::RankId;
use rankforge_store::SqliteStore;

/// Execute the grant command.
///
/// Grants append verbatim; upgrade tokens are reconciled later by the
/// janitor (`fix`/`cleanup`), never here.
pub fn execute_grant(args: GrantArgs, store: &mut SqliteStore, formatter: &Formatter) -> Result<()> {
    let token = args.rank.trim();
    if token.is_empty() {
        return Err(CliError::InvalidInput("Rank token is empty".to_string()));
    }
    let rank = RankId::new(token);

    if store.grant_rank(&args.username, &rank)? {
        println!(
            "{}",
            formatter.success(&format!("Granted {} to {}", rank, args.username))
        );
    } else {
        println!(
            "{}",
            formatter.warning(&format!("{} already holds {}", args.username, rank))
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_grant_appends_verbatim() {
        let mut store = SqliteStore::new(":memory:").unwrap();
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        let args = GrantArgs {
            username: "steve".to_string(),
            rank: "vip_to_vip_plus".to_string(),
        };
        execute_grant(args, &mut store, &formatter).unwrap();

        // The upgrade token is stored untouched, not applied.
        assert_eq!(
            store.load_ranks("steve").unwrap().unwrap(),
            vec![RankId::new("vip_to_vip_plus")]
        );
    }

    #[test]
    fn test_grant_empty_token_rejected() {
        let mut store = SqliteStore::new(":memory:").unwrap();
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        let args = GrantArgs {
            username: "steve".to_string(),
            rank: "   ".to_string(),
        };
        let result = execute_grant(args, &mut store, &formatter);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }
}

//! Show command implementation.

use crate::cli::ShowArgs;
use crate::error::Result;
use crate::output::Formatter;
use rankforge_domain::traits::RankStore;
use rankforge_store::SqliteStore;

/// Execute the show command.
pub fn execute_show(args: ShowArgs, store: &SqliteStore, formatter: &Formatter) -> Result<()> {
    match store.load_ranks(&args.username)? {
        Some(ranks) => {
            println!("{}", formatter.format_ranks(&args.username, &ranks)?);
        }
        None => {
            println!(
                "{}",
                formatter.info(&format!("No rank record for '{}'", args.username))
            );
        }
    }
    Ok(())
}

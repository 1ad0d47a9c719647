//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rankforge CLI - Manage player rank entitlements.
#[derive(Debug, Parser)]
#[command(name = "rankforge")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the rank database
    #[arg(short, long, global = true, env = "RANKFORGE_DB")]
    pub db: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (tokens only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show a user's current rank set
    Show(ShowArgs),

    /// Grant a rank token to a user
    Grant(GrantArgs),

    /// Revoke a rank token from a user
    Revoke(RevokeArgs),

    /// Apply a user's pending upgrades and drop superseded ranks
    Fix(FixArgs),

    /// Sweep every user record, fixing each one
    Cleanup(CleanupArgs),

    /// List the rank catalog
    Catalog,

    /// Seed the rank catalog from a TOML file
    ImportCatalog(ImportCatalogArgs),

    /// Run the scheduled cleanup worker until interrupted
    SweepDaemon(SweepDaemonArgs),
}

/// Arguments for the show command.
#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// Username to look up
    pub username: String,
}

/// Arguments for the grant command.
#[derive(Debug, Parser)]
pub struct GrantArgs {
    /// Username to grant to
    pub username: String,

    /// Rank token to grant (plain or `<source>_to_<destination>` upgrade)
    pub rank: String,
}

/// Arguments for the revoke command.
#[derive(Debug, Parser)]
pub struct RevokeArgs {
    /// Username to revoke from
    pub username: String,

    /// Rank token to revoke
    pub rank: String,
}

/// Arguments for the fix command.
#[derive(Debug, Parser)]
pub struct FixArgs {
    /// Username whose rank set to normalize
    pub username: String,
}

/// Arguments for the cleanup command.
#[derive(Debug, Parser)]
pub struct CleanupArgs {
    /// Report what would change without persisting anything
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the import-catalog command.
#[derive(Debug, Parser)]
pub struct ImportCatalogArgs {
    /// TOML file of [[rank]] entries
    pub file: PathBuf,
}

/// Arguments for the sweep-daemon command.
#[derive(Debug, Parser)]
pub struct SweepDaemonArgs {
    /// Minutes between sweeps (overrides the default of 60)
    #[arg(short, long)]
    pub interval: Option<u64>,

    /// Report what would change without persisting anything
    #[arg(long)]
    pub dry_run: bool,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_command() {
        let cli = Cli::parse_from(["rankforge", "show", "steve"]);
        match cli.command {
            Command::Show(args) => assert_eq!(args.username, "steve"),
            _ => panic!("Expected Show command"),
        }
    }

    #[test]
    fn test_grant_command() {
        let cli = Cli::parse_from(["rankforge", "grant", "steve", "vip_to_vip_plus"]);
        match cli.command {
            Command::Grant(args) => {
                assert_eq!(args.username, "steve");
                assert_eq!(args.rank, "vip_to_vip_plus");
            }
            _ => panic!("Expected Grant command"),
        }
    }

    #[test]
    fn test_cleanup_dry_run_flag() {
        let cli = Cli::parse_from(["rankforge", "cleanup", "--dry-run"]);
        match cli.command {
            Command::Cleanup(args) => assert!(args.dry_run),
            _ => panic!("Expected Cleanup command"),
        }
    }

    #[test]
    fn test_global_db_flag() {
        let cli = Cli::parse_from(["rankforge", "--db", "/tmp/ranks.db", "catalog"]);
        assert_eq!(cli.db.unwrap().to_str().unwrap(), "/tmp/ranks.db");
    }

    #[test]
    fn test_daemon_interval() {
        let cli = Cli::parse_from(["rankforge", "sweep-daemon", "--interval", "15"]);
        match cli.command {
            Command::SweepDaemon(args) => assert_eq!(args.interval, Some(15)),
            _ => panic!("Expected SweepDaemon command"),
        }
    }
}

//! Rankforge CLI - Command-line interface for rank entitlement management.

use clap::Parser;
use rankforge_cli::commands;
use rankforge_cli::{Cli, Command, Config, Formatter};
use rankforge_store::SqliteStore;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> rankforge_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load config from the explicit path or the default location
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_default(),
    };

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    // Open the store
    let db_path = config.resolve_db_path(cli.db);
    let mut store = SqliteStore::new(&db_path)?;

    // Handle commands
    match cli.command {
        Command::Show(args) => {
            commands::execute_show(args, &store, &formatter)?;
        }
        Command::Grant(args) => {
            commands::execute_grant(args, &mut store, &formatter)?;
        }
        Command::Revoke(args) => {
            commands::execute_revoke(args, &mut store, &formatter)?;
        }
        Command::Fix(args) => {
            commands::execute_fix(args, &mut store, &formatter)?;
        }
        Command::Cleanup(args) => {
            commands::execute_cleanup(args, &mut store, &formatter)?;
        }
        Command::Catalog => {
            commands::execute_catalog(&store, &formatter)?;
        }
        Command::ImportCatalog(args) => {
            commands::execute_import_catalog(args, &mut store, &formatter)?;
        }
        Command::SweepDaemon(args) => {
            commands::execute_daemon(args, store).await?;
        }
    }

    Ok(())
}

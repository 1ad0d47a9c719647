//! Catalog commands implementation.

use crate::cli::ImportCatalogArgs;
use crate::error::Result;
use crate::output::Formatter;
use rankforge_store::SqliteStore;

/// Execute the catalog command: list catalog entries.
pub fn execute_catalog(store: &SqliteStore, formatter: &Formatter) -> Result<()> {
    let catalog = store.catalog_snapshot()?;
    println!("{}", formatter.format_catalog(&catalog.entries())?);
    Ok(())
}

/// Execute the import-catalog command: seed the catalog from a TOML file.
pub fn execute_import_catalog(
    args: ImportCatalogArgs,
    store: &mut SqliteStore,
    formatter: &Formatter,
) -> Result<()> {
    let count = store.load_catalog_toml(&args.file)?;
    println!(
        "{}",
        formatter.success(&format!("Imported {} catalog entr(ies)", count))
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_import_then_list() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[[rank]]
id = "vip"
name = "VIP"
category = "rank"
price_cents = 499
"#
        )
        .unwrap();

        let mut store = SqliteStore::new(":memory:").unwrap();
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        let args = ImportCatalogArgs {
            file: file.path().to_path_buf(),
        };
        execute_import_catalog(args, &mut store, &formatter).unwrap();

        let catalog = store.catalog_snapshot().unwrap();
        assert_eq!(catalog.len(), 1);
    }
}

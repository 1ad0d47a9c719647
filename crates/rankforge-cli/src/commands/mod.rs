//! Command implementations.

mod catalog;
mod cleanup;
mod daemon;
mod fix;
mod grant;
mod revoke;
mod show;

pub use catalog::{execute_catalog, execute_import_catalog};
pub use cleanup::execute_cleanup;
pub use daemon::execute_daemon;
pub use fix::execute_fix;
pub use grant::execute_grant;
pub use revoke::execute_revoke;
pub use show::execute_show;

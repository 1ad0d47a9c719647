//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and
//! infrastructure. Implementations live in other crates; the normalizer
//! itself never touches them, which keeps it testable with no filesystem
//! or database dependency.

use crate::token::RankId;

/// Repository for user rank sets.
///
/// Implemented by the infrastructure layer (rankforge-store). The rank set
/// is an ordered sequence; implementations must round-trip order exactly.
/// Serializing a read-modify-write against concurrent writers is the
/// caller's job (the `&mut` receiver makes the single-store case safe by
/// construction).
pub trait RankStore {
    /// Error type for store operations
    type Error;

    /// Load a user's rank set; `None` if the user has no record
    fn load_ranks(&self, username: &str) -> Result<Option<Vec<RankId>>, Self::Error>;

    /// Replace a user's rank set wholesale
    fn save_ranks(&mut self, username: &str, ranks: &[RankId]) -> Result<(), Self::Error>;

    /// Append a rank token to a user's set; `false` if already held
    fn grant_rank(&mut self, username: &str, rank: &RankId) -> Result<bool, Self::Error>;

    /// Remove a rank token from a user's set; `false` if not held
    fn revoke_rank(&mut self, username: &str, rank: &RankId) -> Result<bool, Self::Error>;

    /// Every username with at least one rank recorded
    fn list_users(&self) -> Result<Vec<String>, Self::Error>;
}

//! Rank catalog module - the read-only lookup deciding rank exclusivity

use crate::RankId;
use std::collections::HashMap;
use std::fmt;

/// Identifier of a group of mutually-exclusive ranks.
///
/// Two ranks in the same category compete for one "slot" on a user: after
/// an upgrade lands, the superseded rank of the same category is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CategoryId(String);

impl CategoryId {
    /// Create a CategoryId from any string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw category text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CategoryId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A catalog entry for one purchasable rank.
///
/// Only `category` participates in normalization; `name` and `price_cents`
/// are the storefront fields the catalog rows carry alongside it.
#[derive(Debug, Clone, PartialEq)]
pub struct RankInfo {
    /// The plain rank token this entry describes
    pub id: RankId,
    /// Display name shown in the shop and in operator tooling
    pub name: String,
    /// Exclusivity group
    pub category: CategoryId,
    /// Shop price in cents (0 for granted-only ranks)
    pub price_cents: u32,
}

/// Read-only rank catalog lookup.
///
/// Implemented by the infrastructure layer (rankforge-store) and by
/// [`MemoryCatalog`] for static configuration and tests. Implementations
/// must be safe to share read-only across a whole sweep.
pub trait RankCatalog {
    /// Resolve the category of a plain rank token, if the rank is known
    fn category_of(&self, rank: &RankId) -> Option<CategoryId>;
}

/// In-memory catalog backed by a hash map.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    entries: HashMap<RankId, RankInfo>,
}

impl MemoryCatalog {
    /// Build a catalog from entries; later duplicates replace earlier ones
    pub fn new(entries: impl IntoIterator<Item = RankInfo>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|info| (info.id.clone(), info))
                .collect(),
        }
    }

    /// Build a minimal catalog from `(rank, category)` pairs.
    ///
    /// Name defaults to the token text and price to 0; intended for tests
    /// and static wiring where only exclusivity matters.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self::new(pairs.into_iter().map(|(rank, category)| RankInfo {
            id: RankId::new(rank),
            name: rank.to_string(),
            category: CategoryId::new(category),
            price_cents: 0,
        }))
    }

    /// Look up the full entry for a rank
    pub fn get(&self, rank: &RankId) -> Option<&RankInfo> {
        self.entries.get(rank)
    }

    /// All entries, sorted by rank id for deterministic listings
    pub fn entries(&self) -> Vec<&RankInfo> {
        let mut all: Vec<&RankInfo> = self.entries.values().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        all
    }

    /// Number of catalog entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl RankCatalog for MemoryCatalog {
    fn category_of(&self, rank: &RankId) -> Option<CategoryId> {
        self.entries.get(rank).map(|info| info.category.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_lookup() {
        let catalog = MemoryCatalog::from_pairs([("vip", "rank"), ("donor", "donor")]);
        assert_eq!(
            catalog.category_of(&RankId::new("vip")),
            Some(CategoryId::new("rank"))
        );
        assert_eq!(catalog.category_of(&RankId::new("unknown")), None);
    }

    #[test]
    fn test_from_pairs_defaults() {
        let catalog = MemoryCatalog::from_pairs([("vip", "rank")]);
        let info = catalog.get(&RankId::new("vip")).unwrap();
        assert_eq!(info.name, "vip");
        assert_eq!(info.price_cents, 0);
    }

    #[test]
    fn test_entries_sorted() {
        let catalog = MemoryCatalog::from_pairs([("vip", "rank"), ("donor", "donor"), ("mvp", "rank")]);
        let ids: Vec<&str> = catalog.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["donor", "mvp", "vip"]);
    }

    #[test]
    fn test_duplicate_entry_replaces() {
        let catalog = MemoryCatalog::new([
            RankInfo {
                id: RankId::new("vip"),
                name: "VIP".to_string(),
                category: CategoryId::new("rank"),
                price_cents: 499,
            },
            RankInfo {
                id: RankId::new("vip"),
                name: "VIP (sale)".to_string(),
                category: CategoryId::new("rank"),
                price_cents: 399,
            },
        ]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(&RankId::new("vip")).unwrap().price_cents, 399);
    }
}

//! Rank entitlement normalizer
//!
//! Computes the steady state of a user's rank set after applying every
//! pending upgrade token, removing superseded source ranks only when it is
//! safe to do so (a destination of the same category landed). This is the
//! single reconciliation algorithm; callers persist the result.

use crate::catalog::RankCatalog;
use crate::token::RankId;

/// Diff between a rank set and its normalized form.
///
/// `kept` is the full normalized set, `removed` is every input token absent
/// from it (consumed upgrade tokens, superseded sources, collapsed
/// duplicates). Callers use the pair for reporting; persisting `kept` is
/// all that changes state.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizeOutcome {
    /// The normalized rank set
    pub kept: Vec<RankId>,
    /// Input tokens no longer present, de-duplicated, in input order
    pub removed: Vec<RankId>,
}

impl NormalizeOutcome {
    /// Whether normalization changed anything
    pub fn changed(&self, input: &[RankId]) -> bool {
        self.kept != input
    }
}

/// Normalize a user's rank set against the catalog.
///
/// The transform is pure and infallible for string input: no I/O, no
/// errors, linear time and auxiliary space. Applying it twice yields the
/// same result as applying it once, provided plain tokens do not themselves
/// contain `_to_` (see [`RankId::upgrade_parts`] for the split contract).
///
/// Algorithm:
///
/// 1. If no token contains `_to_`, return the input unchanged. This no-op
///    is an observable contract, not just a fast path: duplicates in an
///    upgrade-free input pass through as-is.
/// 2. Partition into upgrade tokens and plain tokens (malformed `_to_`
///    tokens with an empty half count as plain). Plain tokens enter the
///    working set de-duplicated, first occurrence wins.
/// 3. Each upgrade's source joins the working set if absent (the upgrade
///    token is itself evidence of the source entitlement), followed by each
///    distinct destination, both in upgrade-encounter order.
/// 4. A token that was some upgrade's source is then removed iff the
///    catalog knows its category and any destination resolves to that same
///    category (first match wins). Unknown category means keep: the safety
///    default for ranks the catalog has lost track of.
pub fn normalize<C: RankCatalog + ?Sized>(ranks: &[RankId], catalog: &C) -> Vec<RankId> {
    if ranks.iter().all(|rank| !rank.contains_delimiter()) {
        return ranks.to_vec();
    }

    let mut upgrades: Vec<(RankId, RankId)> = Vec::new();
    let mut working: Vec<RankId> = Vec::new();
    for rank in ranks {
        match rank.upgrade_parts() {
            Some(parts) => upgrades.push(parts),
            None => {
                if !working.contains(rank) {
                    working.push(rank.clone());
                }
            }
        }
    }

    let sources: Vec<RankId> = upgrades.iter().map(|(source, _)| source.clone()).collect();
    let mut destinations: Vec<RankId> = Vec::new();
    for (_, destination) in &upgrades {
        if !destinations.contains(destination) {
            destinations.push(destination.clone());
        }
    }

    for source in &sources {
        if !working.contains(source) {
            working.push(source.clone());
        }
    }
    for destination in &destinations {
        if !working.contains(destination) {
            working.push(destination.clone());
        }
    }

    working.retain(|token| {
        if !sources.contains(token) {
            return true;
        }
        let Some(category) = catalog.category_of(token) else {
            // Unknown rank id: keep the source rather than guess.
            return true;
        };
        !destinations
            .iter()
            .any(|destination| catalog.category_of(destination) == Some(category.clone()))
    });

    working
}

/// Normalize and compute the `{ removed, kept }` diff in one call.
///
/// # Examples
///
/// ```
/// use rankforge_domain::{normalize_with_diff, MemoryCatalog, RankId};
///
/// let catalog = MemoryCatalog::from_pairs([("vip", "rank"), ("vip_plus", "rank")]);
/// let ranks = vec![RankId::new("vip"), RankId::new("vip_to_vip_plus")];
/// let outcome = normalize_with_diff(&ranks, &catalog);
/// assert_eq!(outcome.kept, vec![RankId::new("vip_plus")]);
/// assert_eq!(
///     outcome.removed,
///     vec![RankId::new("vip"), RankId::new("vip_to_vip_plus")]
/// );
/// ```
pub fn normalize_with_diff<C: RankCatalog + ?Sized>(
    ranks: &[RankId],
    catalog: &C,
) -> NormalizeOutcome {
    let kept = normalize(ranks, catalog);
    let mut removed: Vec<RankId> = Vec::new();
    for rank in ranks {
        if !kept.contains(rank) && !removed.contains(rank) {
            removed.push(rank.clone());
        }
    }
    NormalizeOutcome { kept, removed }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MemoryCatalog;

    fn ranks(tokens: &[&str]) -> Vec<RankId> {
        tokens.iter().copied().map(RankId::from).collect()
    }

    fn standard_catalog() -> MemoryCatalog {
        MemoryCatalog::from_pairs([
            ("vip", "rank"),
            ("vip_plus", "rank"),
            ("mvp", "rank"),
            ("donor", "donor"),
        ])
    }

    #[test]
    fn test_noop_without_upgrades() {
        let catalog = standard_catalog();
        let input = ranks(&["vip", "donor"]);
        assert_eq!(normalize(&input, &catalog), input);
    }

    #[test]
    fn test_noop_preserves_duplicates() {
        // The fast path is an observable contract: an upgrade-free set is
        // returned untouched, duplicates included.
        let catalog = standard_catalog();
        let input = ranks(&["vip", "vip"]);
        assert_eq!(normalize(&input, &catalog), input);
    }

    #[test]
    fn test_single_upgrade_same_category() {
        let catalog = standard_catalog();
        let result = normalize(&ranks(&["vip_to_vip_plus"]), &catalog);
        assert_eq!(result, ranks(&["vip_plus"]));
    }

    #[test]
    fn test_unknown_source_category_kept() {
        let catalog = standard_catalog();
        let result = normalize(&ranks(&["mystery_to_vip_plus"]), &catalog);
        assert_eq!(result, ranks(&["mystery", "vip_plus"]));
    }

    #[test]
    fn test_destination_already_present() {
        let catalog = standard_catalog();
        let result = normalize(&ranks(&["vip", "vip_to_vip_plus", "vip_plus"]), &catalog);
        assert_eq!(result, ranks(&["vip_plus"]));
    }

    #[test]
    fn test_unrelated_category_untouched() {
        let catalog = standard_catalog();
        let result = normalize(&ranks(&["donor", "vip_to_vip_plus"]), &catalog);
        assert_eq!(result, ranks(&["donor", "vip_plus"]));
    }

    #[test]
    fn test_multiple_independent_upgrades() {
        let catalog = MemoryCatalog::from_pairs([
            ("a", "alpha"),
            ("b", "alpha"),
            ("c", "gamma"),
            ("d", "gamma"),
        ]);
        let result = normalize(&ranks(&["a_to_b", "c_to_d"]), &catalog);
        assert_eq!(result, ranks(&["b", "d"]));
    }

    #[test]
    fn test_idempotence_on_fixture() {
        let catalog = standard_catalog();
        let input = ranks(&["donor", "vip", "vip_to_vip_plus", "mystery_to_mvp"]);
        let once = normalize(&input, &catalog);
        let twice = normalize(&once, &catalog);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_destination_category_mismatch_keeps_source() {
        // Upgrade crosses categories: donor is not superseded by vip_plus.
        let catalog = standard_catalog();
        let result = normalize(&ranks(&["donor_to_vip_plus"]), &catalog);
        assert_eq!(result, ranks(&["donor", "vip_plus"]));
    }

    #[test]
    fn test_malformed_tokens_pass_through() {
        let catalog = standard_catalog();
        let result = normalize(&ranks(&["vip_to_", "_to_vip", "vip_to_vip_plus"]), &catalog);
        // The two malformed tokens behave as plain ranks; the real upgrade
        // still applies.
        assert_eq!(result, ranks(&["vip_to_", "_to_vip", "vip_plus"]));
    }

    #[test]
    fn test_duplicate_upgrade_tokens_collapse() {
        let catalog = standard_catalog();
        let result = normalize(
            &ranks(&["vip_to_vip_plus", "vip_to_vip_plus", "vip"]),
            &catalog,
        );
        assert_eq!(result, ranks(&["vip_plus"]));
    }

    #[test]
    fn test_chained_upgrades_collapse() {
        let catalog = standard_catalog();
        let result = normalize(&ranks(&["vip_to_vip_plus", "vip_plus_to_mvp"]), &catalog);
        assert_eq!(result, ranks(&["mvp"]));
    }

    #[test]
    fn test_first_match_category_scan() {
        // One source implicated by two upgrades with destinations in
        // different categories: the first destination sharing the source's
        // category decides removal.
        let catalog = MemoryCatalog::from_pairs([
            ("vip", "rank"),
            ("vip_plus", "rank"),
            ("gold_badge", "badge"),
        ]);
        let result = normalize(&ranks(&["vip_to_gold_badge", "vip_to_vip_plus"]), &catalog);
        // gold_badge does not share vip's category but vip_plus does, so
        // vip is removed; both destinations land.
        assert_eq!(result, ranks(&["gold_badge", "vip_plus"]));
    }

    #[test]
    fn test_diff_reports_removed_and_kept() {
        let catalog = standard_catalog();
        let input = ranks(&["donor", "vip", "vip_to_vip_plus"]);
        let outcome = normalize_with_diff(&input, &catalog);
        assert_eq!(outcome.kept, ranks(&["donor", "vip_plus"]));
        assert_eq!(outcome.removed, ranks(&["vip", "vip_to_vip_plus"]));
        assert!(outcome.changed(&input));
    }

    #[test]
    fn test_diff_unchanged() {
        let catalog = standard_catalog();
        let input = ranks(&["donor", "vip"]);
        let outcome = normalize_with_diff(&input, &catalog);
        assert!(outcome.removed.is_empty());
        assert!(!outcome.changed(&input));
    }
}
